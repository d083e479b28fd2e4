use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app::Sender, group::Group, menu::MenuBar, prelude::*, window::Window};
use tracing::{debug, info, warn};

use crate::app::domain::session::EditorSession;
use crate::app::domain::settings::AppSettings;
use crate::app::domain::theme::EffectiveTheme;
use crate::app::infrastructure::file_access::FileAccessGate;
use crate::app::infrastructure::platform::{self, SystemColorScheme};
use crate::app::messages::Message;
use crate::app::services::autosave::{AUTOSAVE_DEBOUNCE, AutoSaveScheduler, SaveToken};
use crate::app::services::document::{load_document, write_document};
use crate::ui::editor_host::EditorHost;
use crate::ui::error_banner::ErrorBanner;
use crate::ui::file_dialogs::native_open_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::status_bar::StatusBar;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

/// Delay before the editor restyles after a burst of keystrokes.
const RESTYLE_DELAY_SECS: f64 = 0.05;

/// How often the OS color scheme is re-probed while the preference is
/// "system".
const THEME_POLL_SECS: f64 = 2.0;

/// Main application coordinator: owns the session, the scheduler, the
/// widgets, and the mounted editor host. One instance per process; the
/// dispatch loop in `run` feeds it messages.
pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    flex: fltk::group::Flex,
    banner: ErrorBanner,
    editor_area: Group,
    status: StatusBar,
    editor: Option<EditorHost>,
    sender: Sender<Message>,
    settings: Rc<RefCell<AppSettings>>,
    gate: FileAccessGate,
    session: EditorSession,
    autosave: AutoSaveScheduler,
    system_scheme: SystemColorScheme,
    applied_theme: EffectiveTheme,
    restyle_pending: bool,
    /// Last directory used in the open dialog.
    last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        gate: FileAccessGate,
        system_scheme: SystemColorScheme,
    ) -> Self {
        let MainWidgets {
            wind,
            flex,
            menu,
            banner,
            mut editor_area,
            status,
        } = widgets;

        let applied_theme = settings.borrow().theme_mode.resolve(system_scheme);
        let editor = EditorHost::mount_empty(&mut editor_area, &empty_state_message(&gate));

        let mut state = Self {
            window: wind,
            menu,
            flex,
            banner,
            editor_area,
            status,
            editor: Some(editor),
            sender,
            settings,
            gate,
            session: EditorSession::new(),
            autosave: AutoSaveScheduler::new(),
            system_scheme,
            applied_theme,
            restyle_pending: false,
            last_open_directory: None,
        };
        state.apply_chrome_theme();
        state.refresh_chrome();
        state
    }

    pub fn effective_theme(&self) -> EffectiveTheme {
        self.settings.borrow().theme_mode.resolve(self.system_scheme)
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        // Re-entrant opens are ignored while one is in flight.
        if !self.session.begin_open() {
            debug!("open already in flight; ignoring");
            return;
        }
        self.refresh_chrome();

        if !self.gate.is_supported() {
            let err = self.gate.deny();
            warn!("open refused: {err}");
            self.session.open_failed(&err);
            self.refresh_chrome();
            return;
        }

        match native_open_dialog(self.last_open_directory.as_deref()) {
            None => {
                // User dismissed the chooser: silent, nothing changes.
                self.session.open_cancelled();
            }
            Some(path) => {
                if let Some(parent) = path.parent() {
                    self.last_open_directory = Some(parent.to_string_lossy().to_string());
                }
                match load_document(path) {
                    Ok(doc) => {
                        info!(file = %doc.name, "opened");
                        // A pending save still belongs to the previous
                        // file; it must never land on the new one.
                        self.autosave.cancel_pending();
                        self.session.open_succeeded(doc);
                        self.remount_editor();
                    }
                    Err(e) => {
                        warn!("open failed: {e}");
                        self.session.open_failed(&e);
                    }
                }
            }
        }
        self.refresh_chrome();
    }

    /// Final write before the application exits, covering edits still
    /// inside the debounce window.
    pub fn flush_pending_save(&mut self) {
        if !self.autosave.has_pending() {
            return;
        }
        self.autosave.cancel_pending();
        if let Some(path) = self.session.file_path().map(|p| p.to_path_buf()) {
            info!(file = %path.display(), "flushing pending auto-save on exit");
            if let Err(e) = write_document(&path, self.session.content()) {
                warn!("final save failed: {e}");
            }
        }
    }

    // --- Editor & auto-save ---

    pub fn content_changed(&mut self) {
        let Some(text) = self.editor.as_ref().and_then(EditorHost::text) else {
            return;
        };
        if self.session.set_content(text) {
            let token = self.autosave.schedule();
            let s = self.sender;
            fltk::app::add_timeout3(AUTOSAVE_DEBOUNCE.as_secs_f64(), move |_| {
                s.send(Message::AutoSaveFire(token));
            });
        }
        if !self.restyle_pending {
            self.restyle_pending = true;
            let s = self.sender;
            fltk::app::add_timeout3(RESTYLE_DELAY_SECS, move |_| {
                s.send(Message::DoRestyle);
            });
        }
    }

    pub fn do_pending_restyle(&mut self) {
        self.restyle_pending = false;
        if let Some(editor) = self.editor.as_mut() {
            editor.restyle(self.session.content());
        }
    }

    pub fn auto_save_fire(&mut self, token: SaveToken) {
        if !self.autosave.try_fire(token) {
            return;
        }
        // The scheduler is cancelled on every file switch, so an
        // accepted token always refers to the currently open file.
        let Some(path) = self.session.file_path().map(|p| p.to_path_buf()) else {
            return;
        };

        self.session.save_started();
        self.status.update(&self.session);

        // Latest content, captured at fire time.
        match write_document(&path, self.session.content()) {
            Ok(()) => {
                debug!(file = %path.display(), "auto-saved");
                self.session.save_succeeded();
            }
            Err(e) => {
                warn!("auto-save failed: {e}");
                self.session.save_failed(e.to_string());
            }
        }
        self.status.update(&self.session);
    }

    // --- Theme ---

    pub fn cycle_theme(&mut self) {
        let mode = {
            let mut s = self.settings.borrow_mut();
            s.theme_mode = s.theme_mode.cycle();
            if let Err(e) = s.save() {
                warn!("failed to persist settings: {e}");
            }
            s.theme_mode
        };
        info!(mode = mode.label(), "theme preference changed");
        self.apply_effective_theme();
    }

    /// Timer-driven re-probe of the OS scheme. A change only matters
    /// while the preference is "system"; re-arms itself either way.
    pub fn system_theme_poll(&mut self) {
        let scheme = platform::system_color_scheme();
        if scheme != self.system_scheme {
            debug!(?scheme, "system color scheme changed");
            self.system_scheme = scheme;
            self.apply_effective_theme();
        }
        self.arm_theme_poll();
    }

    pub fn arm_theme_poll(&self) {
        let s = self.sender;
        fltk::app::add_timeout3(THEME_POLL_SECS, move |_| {
            s.send(Message::SystemThemePoll);
        });
    }

    fn apply_effective_theme(&mut self) {
        let effective = self.effective_theme();
        if effective == self.applied_theme {
            return;
        }
        self.applied_theme = effective;
        self.apply_chrome_theme();
        // The embedded editor cannot swap its highlight theme in place.
        self.remount_editor();
    }

    fn apply_chrome_theme(&mut self) {
        let is_dark = self.applied_theme.is_dark();
        apply_theme(
            &mut self.window,
            &mut self.menu,
            &mut self.banner,
            &mut self.status,
            is_dark,
        );
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, is_dark);
    }

    // --- View ---

    pub fn toggle_word_wrap(&mut self) {
        let enabled = {
            let mut s = self.settings.borrow_mut();
            s.word_wrap_enabled = !s.word_wrap_enabled;
            let _ = s.save();
            s.word_wrap_enabled
        };
        if let Some(editor) = self.editor.as_mut() {
            editor.set_word_wrap(enabled);
        }
    }

    pub fn set_font_size(&mut self, size: i32) {
        {
            let mut s = self.settings.borrow_mut();
            s.font_size = size as u32;
            let _ = s.save();
        }
        if let Some(editor) = self.editor.as_mut() {
            editor.set_font_size(size);
        }
    }

    // --- Errors & chrome ---

    pub fn dismiss_error(&mut self) {
        self.session.dismiss_error();
        self.refresh_chrome();
    }

    /// Recreate the editor host for the current (session, theme) pair.
    fn remount_editor(&mut self) {
        if let Some(old) = self.editor.take() {
            old.unmount();
        }

        let host = if self.session.is_open() {
            let extension = self
                .session
                .file_path()
                .and_then(|p| p.extension())
                .and_then(|e| e.to_str())
                .map(|e| e.to_string());
            let (font_size, word_wrap) = {
                let s = self.settings.borrow();
                (s.font_size as i32, s.word_wrap_enabled)
            };
            EditorHost::mount_document(
                &mut self.editor_area,
                self.session.content(),
                extension.as_deref(),
                self.applied_theme,
                font_size,
                word_wrap,
                &self.sender,
            )
        } else {
            EditorHost::mount_empty(&mut self.editor_area, &empty_state_message(&self.gate))
        };
        self.editor = Some(host);
        self.window.redraw();
    }

    fn refresh_chrome(&mut self) {
        self.update_window_title();
        self.banner.update(&mut self.flex, self.session.error());
        self.status.update(&self.session);
        self.window.redraw();
    }

    fn update_window_title(&mut self) {
        match self.session.file_name() {
            Some(name) => self.window.set_label(&format!("{name} - MarkPad")),
            None => self.window.set_label("MarkPad"),
        }
    }
}

fn empty_state_message(gate: &FileAccessGate) -> String {
    if gate.is_supported() {
        "No document open\n\nOpen a markdown file to start editing (Ctrl+O).".to_string()
    } else {
        format!("Unsupported environment\n\n{}", gate.deny())
    }
}
