use conversors::{Feature, FormController, Settings};

use crate::cli::{args::TableArgs, global::GlobalArgs, input::read_input};

pub fn handle(
    args: TableArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(args.input.as_deref(), global)?;

    let mut form = FormController::new(Feature::InfoToTable.spec());
    form.set_value("text_input", text);
    form.set_value("context", args.context);

    super::run(form, global, settings)
}
