use conversors::{Feature, FormController, MarkdownSession, PdfOptions, Settings};

use crate::cli::{args::MarkdownArgs, global::GlobalArgs, input::read_input, output};

pub fn handle(
    args: MarkdownArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = read_input(args.input.as_deref(), global)?;

    let mut form = FormController::new(Feature::Markdown.spec());
    form.set_value("markdown", markdown.as_str());
    let rendered = super::submit(&mut form, settings)?;

    if args.pdf {
        let mut session = MarkdownSession::new();
        session.set_markdown(markdown)?;

        let path = args.output.unwrap_or_else(|| settings.pdf.output_path());
        session.export_pdf(&PdfOptions::default(), &path)?;
        output::notice(
            &format!("PDF written to {}", path.display()),
            global.quiet,
            global.no_color,
        );
    } else if args.text {
        println!("{}", rendered.plain_text());
    } else {
        println!("{}", rendered.display());
    }

    if global.copy {
        super::copy(&form, global);
    }
    Ok(())
}
