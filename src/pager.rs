//! The pager component and the registry that owns every live instance.
//!
//! [`PagerSet`] reacts to tray lifecycle calls (create, size, create buffer,
//! repaint, button events, shutdown) and issues desktop switches through
//! the [`WindowManager`] trait.  Painting goes through [`render`] and
//! [`draw_client`], which only need a [`DrawSurface`].

use crate::canvas::Canvas;
use crate::color::{ColorRole, Palette};
use crate::command::{Button, ClientInfo, DesktopRequest, SizeSpec};
use crate::geometry::Rect;
use crate::layout::{LayoutError, PagerLayout};
use crate::traits::{DrawSurface, Tray, WindowManager};
use crate::tray::{ComponentId, TrayComponent};
use log::{debug, info, trace, warn};

/// Possible errors from the pager.
#[derive(Debug, thiserror::Error)]
pub enum PagerError {
    /// No pager is registered under this id.
    #[error("no pager registered as {0}")]
    UnknownComponent(ComponentId),
    /// The pager has no usable size yet.
    #[error("{id} is {width}x{height}; it must be sized before use")]
    NotSized {
        id: ComponentId,
        width: u32,
        height: u32,
    },
    /// The size requested by the tray cannot be laid out.
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),
}

/// Whether the window manager is still running normally.
///
/// Nothing is painted while shutting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    ShuttingDown,
}

/// One pager placed in a tray.
#[derive(Debug)]
pub struct Pager {
    component: TrayComponent,
    layout: Option<PagerLayout>,
}

impl Pager {
    fn new(id: ComponentId) -> Self {
        Self {
            component: TrayComponent::new(id),
            layout: None,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.component.id()
    }

    /// The layout, once [`PagerSet::set_size`] has run.
    pub fn layout(&self) -> Option<&PagerLayout> {
        self.layout.as_ref()
    }

    pub fn component(&self) -> &TrayComponent {
        &self.component
    }

    /// The offscreen buffer, once [`PagerSet::create`] has run.
    pub fn buffer(&self) -> Option<&Canvas> {
        self.component.buffer()
    }

    fn not_sized(&self) -> PagerError {
        let (width, height) = self.component.size();
        PagerError::NotSized {
            id: self.id(),
            width,
            height,
        }
    }
}

/// Every live pager, in creation order.
///
/// The set is owned by whoever drives the tray and is passed by reference
/// to the redraw and input paths.  Dropping it releases everything.
#[derive(Debug, Default)]
pub struct PagerSet {
    pagers: Vec<Pager>,
    next_id: u32,
    palette: Palette,
}

impl PagerSet {
    /// Create an empty registry using the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry drawing with `palette`.
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the palette; takes effect on the next [`update`](Self::update).
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    //  Lifecycle

    /// Startup hook.  Pagers need no global resources, so this only logs.
    pub fn startup(&self) {
        debug!("pager startup ({} instance(s))", self.pagers.len());
    }

    /// Register a new, unsized pager and return its handle.
    pub fn create_pager(&mut self) -> ComponentId {
        let id = ComponentId(self.next_id);
        self.next_id += 1;
        self.pagers.push(Pager::new(id));
        debug!("created pager {}", id);
        id
    }

    /// Size the pager from the one dimension the tray fixed.
    ///
    /// The other dimension follows from the screen aspect ratio and the
    /// desktop count reported by `wm`.  A buffer that already exists is
    /// reallocated if the size changed.
    pub fn set_size<W: WindowManager>(
        &mut self,
        id: ComponentId,
        spec: SizeSpec,
        wm: &W,
    ) -> Result<(), PagerError> {
        let layout = PagerLayout::compute(spec, wm.screen(), wm.desktop_count())?;
        let pager = self.get_mut(id)?;
        let (width, height) = layout.size();
        pager.component.set_size(width, height);
        pager.layout = Some(layout);
        info!(
            "{} sized to {}x{} ({:?}, cell {}x{})",
            id,
            width,
            height,
            layout.orientation(),
            layout.desk_size().0,
            layout.desk_size().1
        );

        let stale = pager
            .component
            .buffer()
            .is_some_and(|b| (b.width(), b.height()) != (width, height));
        if stale {
            debug!("{} resized after its buffer was created, reallocating", id);
            pager.component.replace_buffer(Canvas::new(width, height));
        }
        Ok(())
    }

    /// Allocate the offscreen buffer at the pager's current size.
    ///
    /// Fails with [`PagerError::NotSized`] unless the pager has a positive
    /// width and height.
    pub fn create(&mut self, id: ComponentId) -> Result<(), PagerError> {
        let pager = self.get_mut(id)?;
        let (width, height) = pager.component.size();
        if width == 0 || height == 0 {
            return Err(pager.not_sized());
        }
        if pager
            .component
            .replace_buffer(Canvas::new(width, height))
            .is_some()
        {
            warn!("{} already had a buffer; replaced it", id);
        }
        debug!("{} buffer {}x{}", id, width, height);
        Ok(())
    }

    /// Release every pager's buffer.  The pagers stay registered.
    pub fn shutdown(&mut self) {
        let released = self
            .pagers
            .iter_mut()
            .map(|p| p.component.release_buffer())
            .filter(|released| *released)
            .count();
        info!("pager shutdown: released {} buffer(s)", released);
    }

    /// Drop every pager and empty the registry.
    pub fn destroy(&mut self) {
        debug!("destroying {} pager(s)", self.pagers.len());
        self.pagers.clear();
    }

    //  Accessors

    pub fn get(&self, id: ComponentId) -> Result<&Pager, PagerError> {
        self.pagers
            .iter()
            .find(|p| p.id() == id)
            .ok_or(PagerError::UnknownComponent(id))
    }

    fn get_mut(&mut self, id: ComponentId) -> Result<&mut Pager, PagerError> {
        self.pagers
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(PagerError::UnknownComponent(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pager> {
        self.pagers.iter()
    }

    pub fn len(&self) -> usize {
        self.pagers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pagers.is_empty()
    }

    //  Drawing

    /// Repaint every pager that has a buffer and tell the tray about it.
    ///
    /// Does nothing while `state` is [`RunState::ShuttingDown`].
    pub fn update<W: WindowManager, T: Tray + ?Sized>(
        &mut self,
        wm: &W,
        tray: &mut T,
        state: RunState,
    ) {
        if state == RunState::ShuttingDown {
            trace!("shutting down, skipping pager update");
            return;
        }

        let current = wm.current_desktop();
        let clients = wm.clients();
        let palette = &self.palette;

        for pager in &mut self.pagers {
            let id = pager.component.id();
            let Some(layout) = pager.layout else {
                debug!("{} not sized yet, skipping", id);
                continue;
            };
            let Some(buffer) = pager.component.buffer_mut() else {
                debug!("{} has no buffer yet, skipping", id);
                continue;
            };
            render(&layout, buffer, palette, current, &clients);
            tray.redraw(id);
        }
    }

    //  Input

    /// Handle a button press at pager-relative `(x, y)`.
    ///
    /// * Buttons 1–3 switch to the desktop under the pointer.
    /// * Button 4 (wheel up) switches to the previous desktop.
    /// * Button 5 (wheel down) switches to the next desktop.
    /// * Anything else is ignored.
    ///
    /// Returns the request that was sent to the window manager, or `None`
    /// if the event did not produce one.
    pub fn process_button_event<W: WindowManager>(
        &self,
        id: ComponentId,
        x: i32,
        y: i32,
        button: Button,
        wm: &W,
    ) -> Result<Option<DesktopRequest>, PagerError> {
        let pager = self.get(id)?;
        let request = match button {
            Button::Primary | Button::Middle | Button::Secondary => {
                let layout = pager.layout.as_ref().ok_or_else(|| pager.not_sized())?;
                match layout.desktop_at(x, y) {
                    Some(desktop) => Some(DesktopRequest::SwitchTo(desktop)),
                    None => {
                        debug!("{} at ({}, {}) is outside every desktop", button, x, y);
                        None
                    }
                }
            }
            Button::WheelUp => Some(DesktopRequest::Previous),
            Button::WheelDown => Some(DesktopRequest::Next),
            Button::Other(_) => None,
        };

        let Some(request) = request else {
            return Ok(None);
        };
        info!("{}: {} -> {}", id, button, request);
        let result = match request {
            DesktopRequest::SwitchTo(desktop) => wm.change_desktop(desktop),
            DesktopRequest::Previous => wm.previous_desktop(),
            DesktopRequest::Next => wm.next_desktop(),
        };
        result.map_err(|e| PagerError::WindowManager(e.to_string()))?;
        Ok(Some(request))
    }
}

/// Paint a whole pager: background, current-desktop highlight, clients
/// (in the order given, so later ones cover earlier ones), and dividers.
pub fn render<S: DrawSurface + ?Sized>(
    layout: &PagerLayout,
    surface: &mut S,
    palette: &Palette,
    current_desktop: usize,
    clients: &[ClientInfo],
) {
    let (width, height) = layout.size();
    surface.fill_rect(
        Rect::new(0, 0, width as i32, height as i32),
        palette.get(ColorRole::Background),
    );
    if current_desktop < layout.desktop_count() {
        surface.fill_rect(
            layout.cell_rect(current_desktop),
            palette.get(ColorRole::ActiveBackground),
        );
    }

    for client in clients {
        draw_client(layout, surface, palette, client, current_desktop);
    }

    let divider = palette.get(ColorRole::Foreground);
    for (from, to) in layout.dividers() {
        surface.draw_line(from, to, divider);
    }
}

/// Paint one client into its desktop cell.
///
/// Unmapped clients and clients whose projection clips to nothing are
/// skipped.  Returns whether anything was drawn.
pub fn draw_client<S: DrawSurface + ?Sized>(
    layout: &PagerLayout,
    surface: &mut S,
    palette: &Palette,
    client: &ClientInfo,
    current_desktop: usize,
) -> bool {
    if !client.mapped {
        return false;
    }
    let Some(rect) = layout.project(client, current_desktop) else {
        trace!("client at ({}, {}) clips to nothing", client.x, client.y);
        return false;
    };

    surface.draw_rect(rect, palette.get(ColorRole::Outline));

    if rect.width > 1 && rect.height > 1 {
        let role = if client.is_highlighted(current_desktop) {
            ColorRole::ActiveForeground
        } else {
            ColorRole::Foreground
        };
        surface.fill_rect(rect.interior(), palette.get(role));
    }
    true
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::geometry::Point;
    use crate::traits::mock::{DrawOp, MockWm, RecordingSurface, RecordingTray};

    /// 1000x800 screen; `FixedHeight(82)` gives 102x82 cells at scale 0.1.
    fn wm(desktops: usize) -> MockWm {
        MockWm::new(1000, 800, desktops)
    }

    fn sized_set(wm: &MockWm, spec: SizeSpec) -> (PagerSet, ComponentId) {
        let mut set = PagerSet::new();
        let id = set.create_pager();
        set.set_size(id, spec, wm).unwrap();
        set.create(id).unwrap();
        (set, id)
    }

    fn layout(desktops: usize) -> PagerLayout {
        PagerLayout::compute(
            SizeSpec::FixedHeight(82),
            crate::command::ScreenSize {
                width: 1000,
                height: 800,
            },
            desktops,
        )
        .unwrap()
    }

    //  Lifecycle

    #[test]
    fn new_set_is_empty() {
        let set = PagerSet::new();
        assert!(set.is_empty());
        set.startup();
    }

    #[test]
    fn create_pager_registers_unsized_instance() {
        let mut set = PagerSet::new();
        let a = set.create_pager();
        let b = set.create_pager();
        assert_ne!(a, b);
        assert_eq!(set.len(), 2);
        let p = set.get(a).unwrap();
        assert!(p.layout().is_none());
        assert!(p.buffer().is_none());
        assert_eq!(p.component().size(), (0, 0));
    }

    #[test]
    fn set_size_updates_component() {
        let wm = wm(3);
        let mut set = PagerSet::new();
        let id = set.create_pager();
        set.set_size(id, SizeSpec::FixedHeight(82), &wm).unwrap();
        assert_eq!(set.get(id).unwrap().component().size(), (103 * 3, 82));
    }

    #[test]
    fn create_before_size_fails() {
        let mut set = PagerSet::new();
        let id = set.create_pager();
        match set.create(id) {
            Err(PagerError::NotSized { width: 0, height: 0, .. }) => {}
            other => panic!("expected NotSized, got {:?}", other),
        }
    }

    #[test]
    fn create_allocates_buffer_of_component_size() {
        let wm = wm(2);
        let (set, id) = sized_set(&wm, SizeSpec::FixedWidth(100));
        let buf = set.get(id).unwrap().buffer().unwrap();
        // 100 * 800 / 1000 = 80
        assert_eq!((buf.width(), buf.height()), (100, 81 * 2));
    }

    #[test]
    fn resize_after_create_reallocates() {
        let wm = wm(2);
        let (mut set, id) = sized_set(&wm, SizeSpec::FixedHeight(82));
        set.set_size(id, SizeSpec::FixedHeight(41), &wm).unwrap();
        let buf = set.get(id).unwrap().buffer().unwrap();
        assert_eq!((buf.width(), buf.height()), (52 * 2, 41));
    }

    #[test]
    fn unknown_id_rejected() {
        let mut set = PagerSet::new();
        let id = set.create_pager();
        set.destroy();
        assert!(matches!(set.create(id), Err(PagerError::UnknownComponent(_))));
    }

    #[test]
    fn set_size_propagates_layout_error() {
        let wm = wm(2);
        let mut set = PagerSet::new();
        let id = set.create_pager();
        let r = set.set_size(id, SizeSpec::FixedWidth(0), &wm);
        assert!(matches!(r, Err(PagerError::Layout(LayoutError::ZeroDimension(_)))));
    }

    #[test]
    fn shutdown_releases_buffers_and_destroy_empties() {
        let wm = wm(2);
        let (mut set, id) = sized_set(&wm, SizeSpec::FixedHeight(82));
        let other = set.create_pager();
        set.shutdown();
        assert!(set.get(id).unwrap().buffer().is_none());
        assert!(set.get(other).is_ok());
        assert_eq!(set.len(), 2);
        set.destroy();
        assert!(set.is_empty());
    }

    //  Rendering

    #[test]
    fn render_paints_in_order() {
        let l = layout(3);
        let palette = Palette::default();
        let mut s = RecordingSurface::default();
        let clients = vec![ClientInfo::new(50, 50, 200, 100, 1)];
        render(&l, &mut s, &palette, 1, &clients);

        assert_eq!(
            s.ops,
            vec![
                DrawOp::Fill(Rect::new(0, 0, 309, 82), palette.background),
                DrawOp::Fill(Rect::new(103, 0, 102, 82), palette.active_background),
                DrawOp::Outline(Rect::new(109, 6, 20, 10), palette.outline),
                DrawOp::Fill(Rect::new(110, 7, 19, 9), palette.foreground),
                DrawOp::Line(Point::new(102, 0), Point::new(102, 82), palette.foreground),
                DrawOp::Line(Point::new(205, 0), Point::new(205, 82), palette.foreground),
            ]
        );
    }

    #[test]
    fn unmapped_client_never_drawn() {
        let l = layout(2);
        let mut s = RecordingSurface::default();
        let mut c = ClientInfo::new(50, 50, 200, 100, 0);
        c.mapped = false;
        assert!(!draw_client(&l, &mut s, &Palette::default(), &c, 0));
        assert!(s.ops.is_empty());
    }

    #[test]
    fn clipped_away_client_never_drawn() {
        let l = layout(2);
        let mut s = RecordingSurface::default();
        let c = ClientInfo::new(-5000, 50, 200, 100, 0);
        assert!(!draw_client(&l, &mut s, &Palette::default(), &c, 0));
        assert!(s.ops.is_empty());
    }

    #[test]
    fn one_pixel_client_gets_outline_only() {
        let l = layout(1);
        let mut s = RecordingSurface::default();
        // width 10 * 0.1 = 1
        let c = ClientInfo::new(100, 100, 10, 300, 0);
        assert!(draw_client(&l, &mut s, &Palette::default(), &c, 0));
        assert_eq!(s.ops.len(), 1);
        assert!(matches!(s.ops[0], DrawOp::Outline(r, _) if r.width == 1));
    }

    #[test]
    fn sticky_client_drawn_in_current_cell() {
        let l = layout(4);
        let palette = Palette::default();
        let mut s = RecordingSurface::default();
        let mut c = ClientInfo::new(50, 50, 200, 100, 0);
        c.sticky = true;
        draw_client(&l, &mut s, &palette, &c, 3);
        assert_eq!(s.ops[0], DrawOp::Outline(Rect::new(6 + 3 * 103, 6, 20, 10), palette.outline));
    }

    fn fill_color(ops: &[DrawOp]) -> Color {
        match ops.last() {
            Some(DrawOp::Fill(_, c)) => *c,
            other => panic!("expected a fill, got {:?}", other),
        }
    }

    #[test]
    fn active_fill_only_when_visible() {
        let l = layout(3);
        let palette = Palette::default();

        let cases = [
            // (active, sticky, desktop, current, expected active colour)
            (true, false, 1, 1, true),
            (true, false, 2, 1, false),
            (true, true, 2, 1, true),
            (false, true, 1, 1, false),
            (false, false, 1, 1, false),
        ];
        for (active, sticky, desktop, current, expect_active) in cases {
            let mut c = ClientInfo::new(50, 50, 200, 100, desktop);
            c.active = active;
            c.sticky = sticky;
            let mut s = RecordingSurface::default();
            draw_client(&l, &mut s, &palette, &c, current);
            let expected = if expect_active {
                palette.active_foreground
            } else {
                palette.foreground
            };
            assert_eq!(fill_color(&s.ops), expected, "case {:?}", (active, sticky, desktop, current));
        }
    }

    #[test]
    fn higher_clients_paint_over_lower_ones() {
        let l = layout(1);
        let palette = Palette::default();
        let mut canvas = Canvas::new(103, 82);
        let mut bottom = ClientInfo::new(0, 0, 500, 500, 0);
        bottom.active = true;
        let top = ClientInfo::new(100, 100, 500, 500, 0);
        render(&l, &mut canvas, &palette, 0, &[bottom, top]);
        // (20, 20) is inside both; the later (top) client wins.
        assert_eq!(canvas.pixel(20, 20), Some(palette.foreground));
        // (3, 3) only inside the bottom, active client.
        assert_eq!(canvas.pixel(3, 3), Some(palette.active_foreground));
    }

    #[test]
    fn update_paints_buffers_and_notifies_tray() {
        let mut wm = wm(2);
        wm.current.set(1);
        wm.clients.push(ClientInfo::new(50, 50, 200, 100, 1));
        let (mut set, id) = sized_set(&wm, SizeSpec::FixedHeight(82));
        let bare = set.create_pager();
        let mut tray = RecordingTray::default();

        set.update(&wm, &mut tray, RunState::Running);

        assert_eq!(tray.redraws, vec![id]);
        assert!(set.get(bare).unwrap().buffer().is_none());
        let palette = set.palette().clone();
        let buf = set.get(id).unwrap().buffer().unwrap();
        assert_eq!(buf.pixel(0, 0), Some(palette.background));
        assert_eq!(buf.pixel(103, 0), Some(palette.active_background));
        assert_eq!(buf.pixel(102, 40), Some(palette.foreground));
        // client outline corner in desktop 1
        assert_eq!(buf.pixel(103 + 6, 6), Some(palette.outline));
        assert_eq!(buf.pixel(103 + 10, 10), Some(palette.foreground));
    }

    #[test]
    fn update_skips_clients_on_missing_desktops() {
        let mut wm = wm(2);
        wm.clients.push(ClientInfo::new(50, 50, 200, 100, 30_000_000));
        wm.clients
            .push(ClientInfo::new(i32::MAX - 10, i32::MIN, u32::MAX, u32::MAX, 0));
        let (mut set, id) = sized_set(&wm, SizeSpec::FixedHeight(82));
        // Current desktop past the count the pager was sized with.
        wm.current.set(5);
        let mut tray = RecordingTray::default();

        set.update(&wm, &mut tray, RunState::Running);

        assert_eq!(tray.redraws, vec![id]);
        let palette = set.palette().clone();
        let buf = set.get(id).unwrap().buffer().unwrap();
        assert_eq!(buf.pixel(6, 6), Some(palette.background));
        assert_eq!(buf.pixel(103 + 6, 6), Some(palette.background));
    }

    #[test]
    fn update_is_noop_while_shutting_down() {
        let wm = wm(2);
        let (mut set, id) = sized_set(&wm, SizeSpec::FixedHeight(82));
        let mut tray = RecordingTray::default();
        set.update(&wm, &mut tray, RunState::ShuttingDown);
        assert!(tray.redraws.is_empty());
        let buf = set.get(id).unwrap().buffer().unwrap();
        assert_eq!(buf.pixel(0, 0), Some(Color::default()));
    }

    #[test]
    fn update_uses_configured_palette() {
        let wm = wm(1);
        let (mut set, id) = sized_set(&wm, SizeSpec::FixedHeight(82));
        let palette = Palette {
            active_background: Color::rgb(1, 2, 3),
            ..Palette::default()
        };
        set.set_palette(palette);
        set.update(&wm, &mut RecordingTray::default(), RunState::Running);
        let buf = set.get(id).unwrap().buffer().unwrap();
        assert_eq!(buf.pixel(50, 50), Some(Color::rgb(1, 2, 3)));
    }

    //  Input

    #[test]
    fn click_switches_to_desktop_under_pointer() {
        let wm = MockWm::new(100, 10, 3);
        let (set, id) = sized_set(&wm, SizeSpec::FixedHeight(10));
        assert_eq!(set.get(id).unwrap().layout().unwrap().desk_size(), (100, 10));
        for (n, button) in [1u32, 2, 3].into_iter().enumerate() {
            let r = set
                .process_button_event(id, 210, 5, Button::from(button), &wm)
                .unwrap();
            assert_eq!(r, Some(DesktopRequest::SwitchTo(2)));
            assert_eq!(wm.switch_log.borrow().len(), n + 1);
        }
        assert_eq!(*wm.switch_log.borrow(), vec![2, 2, 2]);
    }

    #[test]
    fn click_in_vertical_pager_uses_y() {
        let wm = MockWm::new(200, 100, 3);
        let (set, id) = sized_set(&wm, SizeSpec::FixedWidth(20));
        // cell 20x10, stride 11
        let r = set
            .process_button_event(id, 150, 23, Button::Primary, &wm)
            .unwrap();
        assert_eq!(r, Some(DesktopRequest::SwitchTo(2)));
    }

    #[test]
    fn wheel_cycles_desktops() {
        let wm = wm(3);
        let (set, id) = sized_set(&wm, SizeSpec::FixedHeight(82));
        assert_eq!(
            set.process_button_event(id, 0, 0, Button::from(4), &wm).unwrap(),
            Some(DesktopRequest::Previous)
        );
        assert_eq!(
            set.process_button_event(id, 0, 0, Button::from(5), &wm).unwrap(),
            Some(DesktopRequest::Next)
        );
        assert_eq!(wm.previous_calls.get(), 1);
        assert_eq!(wm.next_calls.get(), 1);
        assert!(wm.switch_log.borrow().is_empty());
    }

    #[test]
    fn other_buttons_ignored() {
        let wm = wm(3);
        let (set, id) = sized_set(&wm, SizeSpec::FixedHeight(82));
        for b in [0u32, 6, 7, 9] {
            assert_eq!(
                set.process_button_event(id, 10, 10, Button::from(b), &wm).unwrap(),
                None
            );
        }
        assert!(wm.switch_log.borrow().is_empty());
        assert_eq!(wm.previous_calls.get() + wm.next_calls.get(), 0);
    }

    #[test]
    fn click_outside_cells_ignored() {
        let wm = wm(2);
        let (set, id) = sized_set(&wm, SizeSpec::FixedHeight(82));
        assert_eq!(
            set.process_button_event(id, -5, 0, Button::Primary, &wm).unwrap(),
            None
        );
        assert_eq!(
            set.process_button_event(id, 500, 0, Button::Primary, &wm).unwrap(),
            None
        );
        assert!(wm.switch_log.borrow().is_empty());
    }

    #[test]
    fn click_on_unsized_pager_is_an_error() {
        let wm = wm(2);
        let mut set = PagerSet::new();
        let id = set.create_pager();
        assert!(matches!(
            set.process_button_event(id, 0, 0, Button::Primary, &wm),
            Err(PagerError::NotSized { .. })
        ));
        // Wheel events need no layout.
        assert!(set.process_button_event(id, 0, 0, Button::WheelDown, &wm).is_ok());
    }

    #[test]
    fn window_manager_failure_surfaces() {
        let mut wm = wm(2);
        let (set, id) = sized_set(&wm, SizeSpec::FixedHeight(82));
        wm.fail = true;
        assert!(matches!(
            set.process_button_event(id, 0, 0, Button::Primary, &wm),
            Err(PagerError::WindowManager(_))
        ));
    }
}
