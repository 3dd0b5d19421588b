use conversors::{Feature, FormController, Settings};

use crate::cli::{args::JsonArgs, global::GlobalArgs, input::read_input};

pub fn handle(
    args: JsonArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_input = read_input(args.input.as_deref(), global)?;

    let mut form = FormController::new(Feature::JsonFormatter.spec());
    form.set_value("json_input", json_input);

    super::run(form, global, settings)
}
