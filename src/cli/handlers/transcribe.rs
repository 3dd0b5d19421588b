use conversors::{Feature, FormController, Settings};

use crate::cli::{args::TranscribeArgs, global::GlobalArgs};

pub fn handle(
    args: TranscribeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = FormController::new(Feature::ImageTranscription.spec());
    form.set_value("img_url", args.url);

    super::run(form, global, settings)
}
