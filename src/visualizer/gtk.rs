//! GTK4 + layer-shell host that shows the pagers on the **main thread**.
//!
//! # Widget tree
//!
//! ```text
//! window                         (layer-shell, anchored bottom-left)
//! └ .pager-tray                (horizontal box)
//!     ├ .pager                 (GtkDrawingArea, one per pager)
//!     └ …
//! ```
//!
//! Each drawing area blits its pager's [`Canvas`](crate::canvas::Canvas).
//! Clicks and scroll events are forwarded to
//! [`PagerSet::process_button_event`]; every handled event and a periodic
//! timer repaint the pagers through [`PagerSet::update`].

use crate::canvas::Canvas;
use crate::command::Button;
use crate::pager::{PagerSet, RunState};
use crate::traits::{Tray, WindowManager};
use crate::tray::ComponentId;
use gtk4::prelude::*;
use gtk4::{cairo, gdk, glib};
use gtk4_layer_shell::LayerShell;
use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

/// How often the pagers are repainted when nothing else happens.
const REPAINT_INTERVAL: Duration = Duration::from_millis(500);

const SIGINT: i32 = 2;

//  Default CSS

const DEFAULT_CSS: &str = r#"
window,
window.background {
    background-color: transparent;
    background: none;
}

.pager-tray {
    background-color: rgba(0, 0, 0, 0.75);
    padding: 2px;
}

.pager {
    margin: 0 2px;
}
"#;

//  Tray

/// A [`Tray`] that maps component ids to the drawing areas showing them.
struct AreaTray {
    areas: Vec<(ComponentId, gtk4::DrawingArea)>,
}

impl Tray for AreaTray {
    fn redraw(&mut self, component: ComponentId) {
        match self.areas.iter().find(|(id, _)| *id == component) {
            Some((_, area)) => area.queue_draw(),
            None => warn!("redraw for {} which has no drawing area", component),
        }
    }
}

/// Everything the GTK callbacks share.
struct Host<W: WindowManager> {
    pagers: PagerSet,
    wm: W,
    tray: AreaTray,
    state: RunState,
}

impl<W: WindowManager> Host<W> {
    fn repaint(&mut self) {
        let Host {
            pagers,
            wm,
            tray,
            state,
        } = self;
        pagers.update(&*wm, tray, *state);
    }

    fn button(&mut self, id: ComponentId, x: f64, y: f64, button: Button) {
        if self.state == RunState::ShuttingDown {
            return;
        }
        match self
            .pagers
            .process_button_event(id, x as i32, y as i32, button, &self.wm)
        {
            Ok(Some(request)) => {
                debug!("{} handled: {}", id, request);
                self.repaint();
            }
            Ok(None) => {}
            Err(e) => error!("button event error: {}", e),
        }
    }

    fn shutdown(&mut self) {
        if self.state == RunState::ShuttingDown {
            return;
        }
        self.state = RunState::ShuttingDown;
        self.pagers.shutdown();
        self.pagers.destroy();
    }
}

//  Blitting

/// Paint `canvas` onto `cr`, one horizontal run of equal pixels at a time.
fn blit(canvas: &Canvas, cr: &cairo::Context) -> Result<(), cairo::Error> {
    for (y, row) in canvas.rows().enumerate() {
        let mut start = 0;
        while start < row.len() {
            let color = row[start];
            let end = row[start..]
                .iter()
                .position(|c| *c != color)
                .map_or(row.len(), |n| start + n);
            cr.set_source_rgb(
                f64::from(color.r) / 255.0,
                f64::from(color.g) / 255.0,
                f64::from(color.b) / 255.0,
            );
            cr.rectangle(start as f64, y as f64, (end - start) as f64, 1.0);
            cr.fill()?;
            start = end;
        }
    }
    Ok(())
}

//  Public API

/// Run the GTK4 main loop on the **current** (main) thread, showing every
/// pager in `pagers`.
///
/// The pagers must already be sized and have their buffers created.
pub fn run_main_loop<W: WindowManager + 'static>(
    pagers: PagerSet,
    wm: W,
    css_path: Option<PathBuf>,
) {
    gtk4::init().expect("failed to initialise GTK4");
    info!("GTK4 initialised on main thread");

    load_css(&css_path);

    //  Layer-shell tray window
    let window = gtk4::Window::new();
    window.init_layer_shell();
    window.set_layer(gtk4_layer_shell::Layer::Top);
    window.set_namespace("deskpager");
    window.set_keyboard_mode(gtk4_layer_shell::KeyboardMode::None);
    window.set_anchor(gtk4_layer_shell::Edge::Bottom, true);
    window.set_anchor(gtk4_layer_shell::Edge::Left, true);
    window.auto_exclusive_zone_enable();
    window.set_decorated(false);
    window.remove_css_class("background");

    let container = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
    container.add_css_class("pager-tray");
    window.set_child(Some(&container));

    //  One drawing area per pager
    let mut areas = Vec::new();
    for pager in pagers.iter() {
        let (width, height) = pager.component().size();
        let area = gtk4::DrawingArea::new();
        area.add_css_class("pager");
        area.set_content_width(width as i32);
        area.set_content_height(height as i32);
        container.append(&area);
        areas.push((pager.id(), area));
    }
    info!("tray window with {} pager(s)", areas.len());

    let host = Rc::new(RefCell::new(Host {
        pagers,
        wm,
        tray: AreaTray {
            areas: areas.clone(),
        },
        state: RunState::Running,
    }));

    for (id, area) in &areas {
        let id = *id;

        {
            let host = host.clone();
            area.set_draw_func(move |_area, cr, _w, _h| {
                let host = host.borrow();
                let Ok(pager) = host.pagers.get(id) else {
                    return;
                };
                if let Some(buffer) = pager.buffer() {
                    if let Err(e) = blit(buffer, cr) {
                        warn!("{} blit failed: {}", id, e);
                    }
                }
            });
        }

        let click = gtk4::GestureClick::new();
        click.set_button(0);
        {
            let host = host.clone();
            click.connect_pressed(move |gesture, _n_press, x, y| {
                let button = Button::from(gesture.current_button());
                host.borrow_mut().button(id, x, y, button);
            });
        }
        area.add_controller(click);

        let scroll = gtk4::EventControllerScroll::new(gtk4::EventControllerScrollFlags::VERTICAL);
        {
            let host = host.clone();
            scroll.connect_scroll(move |_, _dx, dy| {
                let button = if dy < 0.0 {
                    Button::WheelUp
                } else {
                    Button::WheelDown
                };
                host.borrow_mut().button(id, 0.0, 0.0, button);
                glib::Propagation::Stop
            });
        }
        area.add_controller(scroll);
    }

    //  Initial paint + present
    host.borrow_mut().repaint();
    window.present();

    //  Periodic repaint
    {
        let host = host.clone();
        glib::timeout_add_local(REPAINT_INTERVAL, move || {
            let mut host = host.borrow_mut();
            if host.state == RunState::ShuttingDown {
                return glib::ControlFlow::Break;
            }
            host.repaint();
            glib::ControlFlow::Continue
        });
    }

    let main_loop = glib::MainLoop::new(None, false);

    {
        let host = host.clone();
        let main_loop = main_loop.clone();
        glib::unix_signal_add_local(SIGINT, move || {
            info!("interrupted, shutting down");
            host.borrow_mut().shutdown();
            main_loop.quit();
            glib::ControlFlow::Break
        });
    }

    info!("entering GLib main loop");
    main_loop.run();
    host.borrow_mut().shutdown();
    info!("GLib main loop exited");
}

//  CSS loading

fn load_css(css_path: &Option<PathBuf>) {
    let provider = gtk4::CssProvider::new();

    let css_content = match css_path.as_ref().filter(|p| p.exists()) {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(content) => {
                info!("user CSS: {} ({} bytes)", p.display(), content.len());
                content
            }
            Err(e) => {
                warn!("CSS read failed ({}): {}, using built-in", p.display(), e);
                DEFAULT_CSS.to_string()
            }
        },
        None => {
            info!("no user CSS, using built-in default");
            DEFAULT_CSS.to_string()
        }
    };

    #[allow(deprecated)]
    provider.load_from_data(&css_content);

    if let Some(display) = gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    } else {
        warn!("no GDK display, CSS will not be applied");
    }
}
