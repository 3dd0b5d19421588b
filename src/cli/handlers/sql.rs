use conversors::{Feature, FormController, Settings};

use crate::cli::{args::SqlArgs, global::GlobalArgs, input::read_input};

pub fn handle_json(
    args: SqlArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    handle(Feature::JsonToSql, "json_input", args, global, settings)
}

pub fn handle_xml(
    args: SqlArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    handle(Feature::XmlToSql, "xml_input", args, global, settings)
}

fn handle(
    feature: Feature,
    source_field: &str,
    args: SqlArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_input(args.input.as_deref(), global)?;

    let mut form = FormController::new(feature.spec());
    form.set_value(source_field, source);
    form.set_value("sql_dbms", args.dbms);

    super::run(form, global, settings)
}
