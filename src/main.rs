//! `molview [MOLECULE] [--options PATH] [--write-schema PATH]`

use std::path::Path;

use molview::{Options, Viewer};

struct Args {
    molecule: Option<String>,
    options: Option<String>,
    schema: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        molecule: None,
        options: None,
        schema: None,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--options" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--options needs a path".to_owned())?;
                parsed.options = Some(path);
            }
            "--write-schema" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--write-schema needs a path".to_owned())?;
                parsed.schema = Some(path);
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag {flag}"));
            }
            _ if parsed.molecule.is_none() => parsed.molecule = Some(arg),
            _ => return Err(format!("unexpected argument {arg}")),
        }
    }
    Ok(parsed)
}

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!(
                "Usage: molview [MOLECULE] [--options PATH] [--write-schema PATH]"
            );
            std::process::exit(2);
        }
    };

    if let Some(path) = args.schema.as_deref() {
        if let Err(e) = Options::save_schema(Path::new(path)) {
            log::error!("{e}");
            std::process::exit(1);
        }
        log::info!("wrote options schema to {path}");
        return;
    }

    let options = match args.options.as_deref().map(|p| Options::load(Path::new(p))) {
        Some(Ok(options)) => options,
        Some(Err(e)) => {
            log::error!("{e}");
            std::process::exit(1);
        }
        None => Options::default(),
    };

    let mut builder = Viewer::builder().with_options(options);
    if let Some(molecule) = args.molecule {
        builder = builder.with_molecule(molecule);
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
