use std::process::ExitCode;

use mask_search::args::{Args, ArgsError};
use mask_search::image_search::{self, SearchResult};

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e @ ArgsError::MissingArguments { .. }) => {
            eprintln!("❌ {e}");
            mask_search::args::print_help();
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::from(1);
        }
    };

    let default_level = if args.debug_mode { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> SearchResult<()> {
    let main_image = image_search::load_image(&args.main_image)?;
    let search_image = image_search::load_image(&args.search_image)?;

    log::info!(
        "🔍 Searching {:?} ({}x{}) for {:?} ({}x{})",
        args.main_image,
        main_image.width(),
        main_image.height(),
        args.search_image,
        search_image.width(),
        search_image.height()
    );

    let report = image_search::scan(&main_image, &search_image, &args.config);
    report.print();

    let mut marked = main_image;
    image_search::draw_matches(&mut marked, &report.matches);
    image_search::save_image(&args.output_image, &marked)?;
    log::info!("✅ Marked image written to {:?}", args.output_image);

    if let Some(path) = &args.report {
        image_search::write_report(path, &report)?;
        log::info!("📄 Report written to {:?}", path);
    }

    Ok(())
}
