//! Retro Console Headless Runner
//!
//! Renders a demo scene without a host and outputs the result, either as a
//! grid snapshot (text or JSON) or as a PPM image of the framebuffer.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use retro_console::app::{self, Config};
use retro_console::core::{
    Alignment, BlendMode, Color, ConsoleGrid, LineThickness, Rect, Snapshot, TextStyle,
};
use retro_console::renderer::RootConsole;
use retro_console::{console_print, console_print_rect};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let mut columns: Option<usize> = None;
    let mut rows: Option<usize> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut image_file: Option<PathBuf> = None;
    let mut output_format = OutputFormat::Text;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--cols" => {
                i += 1;
                if i < args.len() {
                    columns = args[i].parse().ok();
                }
            },
            "-r" | "--rows" => {
                i += 1;
                if i < args.len() {
                    rows = args[i].parse().ok();
                }
            },
            "--config" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(PathBuf::from(&args[i]));
                }
            },
            "-o" | "--ppm" => {
                i += 1;
                if i < args.len() {
                    image_file = Some(PathBuf::from(&args[i]));
                }
            },
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            },
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            },
            "-q" | "--quiet" => {
                output_format = OutputFormat::None;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            other => {
                eprintln!("Ignoring unknown argument '{}'", other);
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let mut config = match &config_file {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error reading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            },
        },
        None => Config::load_or_default(),
    };
    if let Some(columns) = columns {
        config.columns = columns;
    }
    if let Some(rows) = rows {
        config.rows = rows;
    }

    app::init_logging(&config.log_filter);
    tracing::info!(columns = config.columns, rows = config.rows, "rendering demo scene");

    let mut console = config.build_console();
    draw_demo(&mut console);
    let (_, updated) = console.render_image();
    tracing::debug!(updated, "first frame rendered");

    if let Some(path) = &image_file {
        if let Err(e) = write_ppm(&console, path) {
            eprintln!("Error writing image '{}': {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    }

    let snapshot = Snapshot::from_grid(console.grid());
    match output_format {
        OutputFormat::Text => {
            println!("Console ({}x{}):", snapshot.width, snapshot.height);
            println!("---");
            print!("{}", snapshot.to_text());
            println!("---");
        },
        OutputFormat::Json => match snapshot.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                return ExitCode::FAILURE;
            },
        },
        OutputFormat::None => {},
    }

    ExitCode::SUCCESS
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
    None,
}

/// Draw a framed window with wrapped text, a palette strip and a
/// translucent popup blitted on top
fn draw_demo(console: &mut RootConsole) {
    let (width, height) = (console.grid().width(), console.grid().height());
    let base = console.default_style();

    let frame = base
        .with_foreground(Color::light_azure())
        .with_line_thickness(LineThickness::Double);
    console.print_frame(0, 0, width, height, true, &frame, "Retro Console");

    let body = base.with_foreground(Color::lightest_grey());
    console_print_rect!(
        console,
        2,
        2,
        width.saturating_sub(4),
        4,
        false,
        style = body;
        "A {}x{} grid of cells, drawn with {} builtin fonts.",
        width,
        height,
        4
    );

    let swatches = [
        Color::red(),
        Color::orange(),
        Color::yellow(),
        Color::green(),
        Color::cyan(),
        Color::blue(),
        Color::purple(),
        Color::magenta(),
    ];
    let swatch_row = height as i32 - 3;
    for (x, color) in (2..).zip(swatches) {
        console.set_background(x, swatch_row, color, BlendMode::Set);
    }

    let mut popup = ConsoleGrid::new(16, 3);
    popup.set_default_style(TextStyle::new(Color::WHITE, Color::darker_crimson()));
    popup.clear();
    let centered = popup.default_style().with_alignment(Alignment::Center);
    console_print!(popup, 8, 1, style = centered; "paused");
    let x = (width as i32 - 16) / 2;
    let y = (height as i32 - 3) / 2;
    ConsoleGrid::blit(&popup, popup.bounds(), console, x, y, 1.0, 0.75);

    let footer = base
        .with_foreground(Color::dark_grey())
        .with_alignment(Alignment::Right)
        .with_blend_mode(BlendMode::None);
    console_print!(console, width as i32 - 2, height as i32 - 1, style = footer; "v{}", env!("CARGO_PKG_VERSION"));
}

/// Write the framebuffer as a binary PPM (P6) image
fn write_ppm(console: &RootConsole, path: &Path) -> io::Result<()> {
    let mut out = io::BufWriter::new(std::fs::File::create(path)?);
    write!(out, "P6\n{} {}\n255\n", console.width(), console.height())?;
    for &pixel in console.framebuffer() {
        let color = Color::from_xrgb(pixel);
        out.write_all(&[color.r(), color.g(), color.b()])?;
    }
    out.flush()
}

fn print_help() {
    println!("Retro Console Headless Runner");
    println!();
    println!("Usage: retro-console-headless [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --cols <N>       Set console width in cells");
    println!("  -r, --rows <N>       Set console height in cells");
    println!("      --config <PATH>  Read configuration from a JSON file");
    println!("  -o, --ppm <PATH>     Write the rendered framebuffer as a PPM image");
    println!("  -j, --json           Output snapshot as JSON");
    println!("  -t, --text           Output snapshot as text (default)");
    println!("  -q, --quiet          Do not output a snapshot");
    println!("  -h, --help           Show this help message");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Log filter (overrides the config's log_filter)");
}
