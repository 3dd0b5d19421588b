use conversors::{Feature, FormController, Settings};

use crate::cli::{args::MathArgs, global::GlobalArgs, input::read_input};

pub fn handle(
    args: MathArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let formula = read_input(args.input.as_deref(), global)?;

    let mut form = FormController::new(Feature::MathToLatex.spec());
    form.set_value("formula_input", formula);

    super::run(form, global, settings)
}
