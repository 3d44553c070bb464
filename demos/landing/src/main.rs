use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use scrollfx_core::Size;
use scrollfx_platform::{HeadlessConfig, HeadlessRunner};

#[derive(Parser, Debug)]
#[command(name = "landing", version, about = "Scroll the landing page through a headless viewport")]
struct Cli {
    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280.0, global = true)]
    width: f32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0, global = true)]
    height: f32,

    /// Milliseconds spent at each scroll stop before its frame is taken.
    #[arg(long, default_value_t = 250, global = true)]
    dwell_ms: u64,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one JSON frame per scroll stop, top to bottom.
    Frames {
        /// Distance between scroll stops.
        #[arg(long, default_value_t = 100.0)]
        step: f32,

        /// Pretty-print each frame.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Print the page markup at one scroll position.
    Html {
        #[arg(long, default_value_t = 0.0)]
        scroll: f32,
    },
    /// Print a one-line summary per scroll stop.
    Summary {
        #[arg(long, default_value_t = 200.0)]
        step: f32,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = HeadlessConfig {
        viewport: Size::new(cli.run.width, cli.run.height),
        dwell: Duration::from_millis(cli.run.dwell_ms),
    };
    let runner = HeadlessRunner::new(config).context("failed to set up the headless page")?;
    log::info!(
        "document height {} (max scroll {})",
        runner.document_height(),
        runner.max_scroll()
    );

    match cli.cmd {
        Command::Frames { step, pretty } => {
            for frame in runner.sweep(step)? {
                let line = if pretty {
                    serde_json::to_string_pretty(&frame)?
                } else {
                    serde_json::to_string(&frame)?
                };
                println!("{line}");
            }
        }
        Command::Html { scroll } => {
            runner.scroll_to(scroll);
            println!("{}", runner.render_html());
        }
        Command::Summary { step } => {
            for frame in runner.sweep(step)? {
                let flags: Vec<String> = frame
                    .sections
                    .iter()
                    .map(|s| {
                        format!(
                            "{}={}@{:.2}/a{:.2}",
                            s.name,
                            if s.is_visible { "on" } else { "off" },
                            s.scroll_progress,
                            s.reveal_opacity
                        )
                    })
                    .collect();
                println!(
                    "y={:>6.0}  {}  parallax={:+.0}/{:+.0}  t={:.2} {}",
                    frame.scroll_y,
                    flags.join(" "),
                    frame.parallax.near,
                    frame.parallax.far,
                    frame.transition_progress,
                    frame.transition_background
                );
            }
        }
    }
    Ok(())
}
