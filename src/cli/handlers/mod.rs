pub mod clipboard_hold;
pub mod config;
pub mod json;
pub mod markdown;
pub mod math;
pub mod sql;
pub mod table;
pub mod transcribe;
pub mod translate;

use conversors::form::Action;
use conversors::{
    FormController, HttpGateway, RenderedOutput, Settings, SubmissionResult, copy_to_clipboard,
};

use crate::cli::clipboard::DetachedClipboard;
use crate::cli::global::GlobalArgs;
use crate::cli::output;

/// Submits a filled form and returns its rendered output.
///
/// Validation errors, render errors and backend failures all come back as
/// `Err`, carrying the message the user should see.
pub fn submit(
    form: &mut FormController,
    settings: &Settings,
) -> Result<RenderedOutput, Box<dyn std::error::Error>> {
    let gateway = match form.spec().action() {
        Action::Remote { .. } => Some(HttpGateway::new(&settings.api)?),
        Action::Local { .. } => None,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(form.submit(&gateway));

    if let Some(errors) = form.errors() {
        return Err(Box::new(errors.clone()));
    }
    if let Some(SubmissionResult::Failure(message)) = form.result() {
        return Err(message.clone().into());
    }

    let rendered = form.rendered().ok_or("submission produced no output")?;
    Ok(rendered?)
}

/// Submits the form, prints its output and copies it when `--copy` is set.
pub fn run(
    mut form: FormController,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = submit(&mut form, settings)?;
    println!("{}", rendered.display());
    if global.copy {
        copy(&form, global);
    }
    Ok(())
}

/// Copies the form's current output; clipboard problems are only warned about.
pub fn copy(form: &FormController, global: &GlobalArgs) {
    let text = form.copy_text().unwrap_or_default();
    let mut clipboard = DetachedClipboard;
    match copy_to_clipboard(&mut clipboard, &text, &form.spec().copied_notice()) {
        Ok(notice) => output::notice(&notice, global.quiet, global.no_color),
        Err(e) => output::warning(&e.to_string(), global.no_color),
    }
}
