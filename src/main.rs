use clap::Parser;
use pet_of_the_day_widget::utils::error::ErrorSeverity;
use pet_of_the_day_widget::utils::{logger, validation::Validate};
use pet_of_the_day_widget::{
    register_default_widgets, render_form, CliConfig, OutputMode, TitleFilters,
    WidgetFieldNaming, WidgetRegistry, ID_BASE,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Widget preview failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(config: &CliConfig) -> pet_of_the_day_widget::Result<()> {
    config.validate()?;
    let file = config.load_widget_file()?;

    let mut registry = WidgetRegistry::new();
    register_default_widgets(&mut registry)?;
    let widget = registry.create(ID_BASE)?;

    let settings = widget.update(&file.instance, None);

    match config.output {
        OutputMode::Settings => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        OutputMode::Form => {
            let naming = WidgetFieldNaming::new(widget.descriptor().id_base, file.widget.number);
            println!("{}", render_form(&widget.form(Some(&settings), &naming)));
        }
        OutputMode::Html => {
            let html = widget.widget(&file.args, &settings, &TitleFilters::new());
            if html.is_empty() {
                tracing::info!("Title or postal code missing, widget renders nothing");
            } else {
                println!("{}", html);
            }
        }
    }

    Ok(())
}
