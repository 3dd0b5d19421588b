use conversors::{Feature, FormController, Settings};
use tracing::debug;

use crate::cli::{args::TranslateArgs, global::GlobalArgs, input::read_input};

pub fn handle(
    args: TranslateArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(args.input.as_deref(), global)?;

    let mut form = FormController::new(Feature::Translator.spec());
    form.set_value("text_input", text);
    form.set_value("source_language", args.from);
    form.set_value("target_language", args.to);

    if args.swap {
        form.swap("source_language", "target_language");
        debug!(
            from = form.get_value("source_language"),
            to = form.get_value("target_language"),
            "swapped languages"
        );
    }

    super::run(form, global, settings)
}
