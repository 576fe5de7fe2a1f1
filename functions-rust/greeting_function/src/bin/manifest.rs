//! Print the function definition as JSON, e.g. for registering it with a host.

use env_logger::Env;
use greeting_function::definition::greeting_function_definition;
use log::debug;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let definition = greeting_function_definition();
    definition.check()?;
    debug!("Emitting manifest for {}", definition.callback_id);

    println!("{}", definition.to_manifest_json()?);
    Ok(())
}
