use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use sales_report_prep::cli::{normalize, Cli};
use sales_report_prep::{prepare, util, Catalog, Configurator};

fn main() -> Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI and read input documents
  let cfg = normalize(cli)?;

  // Phase 2: resolve the catalog (explicit dir, else process-wide)
  let loaded;
  let catalog: &Catalog = match &cfg.config_dir {
    Some(dir) => {
      loaded = Catalog::load(&Configurator::from_dir(dir))?;
      &loaded
    }
    None => Catalog::global()?,
  };

  // Phase 3: validate, ensure directories, name the report
  match prepare(catalog, &cfg.parameters, &cfg.paths) {
    Ok(prepared) => {
      println!("{}", serde_json::to_string_pretty(&prepared)?);
      Ok(())
    }
    Err(err) => {
      if !err.violations().is_empty() {
        eprintln!("{}", serde_json::to_string_pretty(&serde_json::json!({ "violations": err.violations() }))?);
      }
      Err(err.into())
    }
  }
}
