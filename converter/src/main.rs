mod decode;
mod error;
mod validate;
mod workbook;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use imgsheet_core::grid::ColorGrid;
use imgsheet_core::layout::SheetLayout;

use crate::decode::DecodedImage;
use crate::error::AppError;

#[derive(Parser)]
#[command(
    name = "imgsheet-convert",
    about = "Render an image as pixel-art cells in an .xlsx spreadsheet"
)]
struct Cli {
    /// Input image file (jpg, jpeg or png)
    input: PathBuf,

    /// Output .xlsx path (default: input file name with .xlsx extension,
    /// in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    eprintln!("Checking input: {}", cli.input.display());
    validate::check_input(&cli.input)?;

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.input));

    eprintln!("Decoding image: {}", cli.input.display());
    let img = DecodedImage::open(&cli.input).map_err(AppError::Decode)?;
    eprintln!("Source: {}x{} pixels", img.width, img.height);

    let grid =
        ColorGrid::from_rgba(&img.data, img.width, img.height).map_err(AppError::Decode)?;
    let layout = SheetLayout::for_grid(&grid);

    eprintln!("Drawing {} rows x {} cols...", layout.rows, layout.cols);
    workbook::write_grid(&grid, &layout, &output_path).map_err(AppError::Write)?;

    eprintln!("Wrote {}", output_path.display());
    Ok(())
}

/// Input base name with the extension swapped for .xlsx, relative to the
/// current working directory.
fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("image"));
    PathBuf::from(stem).with_extension("xlsx")
}
