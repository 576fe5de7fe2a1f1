//! The greeting itself: pick a salutation and fill in the template.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Openers a greeting can start with.
pub const SALUTATIONS: [&str; 5] = ["Hello", "Hi", "Howdy", "Hola", "Salut"];

/// Validated inputs of the greeting function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingInputs {
    pub recipient: String,
    pub message: String,
    #[serde(default)]
    pub string_with_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingOutputs {
    pub greeting: String,
}

/// Pick one salutation uniformly at random.
pub fn pick_salutation<R: Rng>(rng: &mut R) -> &'static str {
    SALUTATIONS[rng.random_range(0..SALUTATIONS.len())]
}

/// Fill the greeting template. A missing `string_with_format` renders empty.
pub fn render_greeting(salutation: &str, inputs: &GreetingInputs) -> String {
    let GreetingInputs {
        recipient,
        message,
        string_with_format,
    } = inputs;
    let string_with_format = string_with_format.as_deref().unwrap_or_default();
    format!(
        "{salutation}, <@{recipient}>! :wave: Someone sent the following greeting: \n\n>{message} \n\n{string_with_format}"
    )
}

pub fn generate_greeting_with<R: Rng>(
    inputs: &GreetingInputs,
    rng: &mut R,
) -> GreetingOutputs {
    let salutation = pick_salutation(rng);
    GreetingOutputs {
        greeting: render_greeting(salutation, inputs),
    }
}

/// Generate a greeting using the thread-local RNG.
pub fn generate_greeting(inputs: &GreetingInputs) -> GreetingOutputs {
    generate_greeting_with(inputs, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn inputs() -> GreetingInputs {
        GreetingInputs {
            recipient: "U123".into(),
            message: "Happy Friday".into(),
            string_with_format: Some("a@b.com".into()),
        }
    }

    #[test]
    fn output_is_one_of_five_literals() {
        let expected: Vec<String> = SALUTATIONS
            .iter()
            .map(|s| {
                format!(
                    "{s}, <@U123>! :wave: Someone sent the following greeting: \n\n>Happy Friday \n\na@b.com"
                )
            })
            .collect();
        for _ in 0..50 {
            let out = generate_greeting(&inputs());
            assert!(expected.contains(&out.greeting), "unexpected: {:?}", out.greeting);
        }
    }

    #[test]
    fn starts_with_salutation_and_quotes_message() {
        let mut rng = StdRng::seed_from_u64(7);
        let out = generate_greeting_with(&inputs(), &mut rng);
        assert!(
            SALUTATIONS
                .iter()
                .any(|s| out.greeting.starts_with(&format!("{s}, ")))
        );
        assert!(out.greeting.contains(">Happy Friday"));
        assert!(out.greeting.contains("<@U123>"));
    }

    #[test]
    fn every_salutation_gets_picked() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<&str> = (0..500).map(|_| pick_salutation(&mut rng)).collect();
        assert_eq!(seen.len(), SALUTATIONS.len());
    }

    #[test]
    fn missing_formatted_string_renders_empty() {
        let mut no_format = inputs();
        no_format.string_with_format = None;
        let out = render_greeting("Hi", &no_format);
        assert_eq!(
            out,
            "Hi, <@U123>! :wave: Someone sent the following greeting: \n\n>Happy Friday \n\n"
        );
    }

    #[test]
    fn message_is_not_altered() {
        let mut odd = inputs();
        odd.message = "  *bold* <b>&amp;  ".into();
        let out = render_greeting("Hola", &odd);
        assert!(out.contains(">  *bold* <b>&amp;   \n\n"));
    }
}
