//! Entry point for the **deskpager** binary.
//!
//! Loads the configuration and a window-manager scene, creates one pager per
//! configured placement, and then either
//!
//! * renders every pager to a PPM image (the default), or
//! * shows them in a GTK tray window (`--gtk`, requires the
//!   `visualizer-gtk` feature).
//!
//! ```text
//! deskpager [--config <path>] [--scene <path>] [--out <dir>]
//!           [--click <pager>:<x>,<y>:<button>]... [--gtk]
//! ```

use deskpager::backend::scene::SceneWm;
use deskpager::command::Button;
use deskpager::config::Config;
use deskpager::pager::{PagerSet, RunState};
use deskpager::traits::Tray;
use deskpager::tray::ComponentId;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Resolve the config directory (`$XDG_CONFIG_HOME/deskpager`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("deskpager")
}

/// Load the config from `path`, or from `$XDG_CONFIG_HOME/deskpager/config.json`,
/// falling back to compiled-in defaults.
fn load_config(path: Option<&Path>) -> Config {
    let default_path = config_dir().join("config.json");
    let path = path.unwrap_or(&default_path);
    match Config::load(path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

//  Command line

/// A button press to replay before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Click {
    pager: usize,
    x: i32,
    y: i32,
    button: u32,
}

impl FromStr for Click {
    type Err = String;

    /// Parse `<pager>:<x>,<y>:<button>`, e.g. `0:210,5:1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || format!("invalid click {:?}: expected <pager>:<x>,<y>:<button>", s);
        let mut parts = s.split(':');
        let (Some(pager), Some(pos), Some(button), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        let (x, y) = pos.split_once(',').ok_or_else(bad)?;
        Ok(Click {
            pager: pager.trim().parse().map_err(|_| bad())?,
            x: x.trim().parse().map_err(|_| bad())?,
            y: y.trim().parse().map_err(|_| bad())?,
            button: button.trim().parse().map_err(|_| bad())?,
        })
    }
}

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    scene: Option<PathBuf>,
    out: Option<PathBuf>,
    clicks: Vec<Click>,
    gtk: bool,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Args::default();
        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| format!("{} needs a value", name))
            };
            match arg.as_str() {
                "--config" => parsed.config = Some(value("--config")?.into()),
                "--scene" => parsed.scene = Some(value("--scene")?.into()),
                "--out" => parsed.out = Some(value("--out")?.into()),
                "--click" => parsed.clicks.push(value("--click")?.parse()?),
                "--gtk" => parsed.gtk = true,
                other => return Err(format!("unknown argument {:?}", other)),
            }
        }
        Ok(parsed)
    }
}

//  PPM output

/// A tray that writes each repainted pager to `<dir>/pager-<n>.ppm`.
///
/// Redraw notifications arrive while the pagers are being painted, so the
/// ids are collected and written out afterwards by [`flush`](Self::flush).
struct PpmTray {
    dir: PathBuf,
    pending: Vec<ComponentId>,
}

impl Tray for PpmTray {
    fn redraw(&mut self, component: ComponentId) {
        self.pending.push(component);
    }
}

impl PpmTray {
    fn flush(&mut self, pagers: &PagerSet) -> std::io::Result<()> {
        for (n, pager) in pagers.iter().enumerate() {
            if !self.pending.contains(&pager.id()) {
                continue;
            }
            let Some(buffer) = pager.buffer() else {
                continue;
            };
            let path = self.dir.join(format!("pager-{}.ppm", n));
            let file = std::fs::File::create(&path)?;
            buffer.write_ppm(std::io::BufWriter::new(file))?;
            info!(
                "wrote {} ({}x{})",
                path.display(),
                buffer.width(),
                buffer.height()
            );
        }
        self.pending.clear();
        Ok(())
    }
}

//  Main

fn main() {
    env_logger::init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            error!("{}", e);
            eprintln!("usage: deskpager [--config <path>] [--scene <path>] [--out <dir>] [--click <pager>:<x>,<y>:<button>]... [--gtk]");
            std::process::exit(2);
        }
    };

    let config = load_config(args.config.as_deref());

    let wm = match &args.scene {
        Some(path) => match SceneWm::load(path) {
            Ok(wm) => {
                info!("loaded scene from {}", path.display());
                wm
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => {
            info!("no scene given, using the built-in demo scene");
            SceneWm::demo()
        }
    };

    let mut pagers = PagerSet::with_palette(config.palette.clone());
    pagers.startup();

    let mut ids = Vec::with_capacity(config.pagers.len());
    for spec in &config.pagers {
        let id = pagers.create_pager();
        if let Err(e) = pagers
            .set_size(id, *spec, &wm)
            .and_then(|_| pagers.create(id))
        {
            error!("pager {}: {}", spec, e);
            std::process::exit(1);
        }
        ids.push(id);
    }
    if ids.is_empty() {
        warn!("no pagers configured, nothing to do");
        return;
    }

    if args.gtk {
        run_gtk(pagers, wm);
        return;
    }

    for click in &args.clicks {
        let Some(&id) = ids.get(click.pager) else {
            warn!("click on pager {} ignored: only {} configured", click.pager, ids.len());
            continue;
        };
        match pagers.process_button_event(id, click.x, click.y, Button::from(click.button), &wm) {
            Ok(Some(request)) => info!("click {:?}: {}", click, request),
            Ok(None) => info!("click {:?}: no desktop change", click),
            Err(e) => error!("click {:?}: {}", click, e),
        }
    }

    let mut tray = PpmTray {
        dir: args.out.unwrap_or_else(|| PathBuf::from(".")),
        pending: Vec::new(),
    };
    pagers.update(&wm, &mut tray, RunState::Running);
    if let Err(e) = tray.flush(&pagers) {
        error!("failed to write images: {}", e);
        std::process::exit(1);
    }

    pagers.shutdown();
    pagers.destroy();
}

#[cfg(feature = "visualizer-gtk")]
fn run_gtk(pagers: PagerSet, wm: SceneWm) {
    deskpager::visualizer::gtk::run_main_loop(pagers, wm, Some(config_dir().join("style.css")));
}

#[cfg(not(feature = "visualizer-gtk"))]
fn run_gtk(_pagers: PagerSet, _wm: SceneWm) {
    error!("--gtk requires the `visualizer-gtk` feature");
    std::process::exit(1);
}
