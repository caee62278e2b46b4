use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use zmodal::app::{ModalPage, UiTheme};
use zmodal::core::view::{EventResult, View};
use zmodal::kernel::services::adapters::{ensure_settings_file, load_settings};
use zmodal::kernel::services::ports::Settings;
use zmodal::tui::crossterm::into_input_event;
use zmodal::tui::terminal_guard::{install_panic_restore, TerminalGuard, TerminationSignal};
use zmodal::ui::backend::terminal::RatatuiTerminal;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let settings = load_startup_settings();
    let mut theme = UiTheme::from_settings(&settings.theme);
    theme.adapt_to_terminal_capabilities();
    let mut page = ModalPage::with_theme(settings.modal, theme);

    let guard = TerminalGuard::new()?;
    install_panic_restore(guard.restorer());

    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    let _signals = zmodal::tui::terminal_guard::install_termination_signals(
        guard.restorer(),
        signal_tx,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let result = run(&mut page, &mut terminal, &signal_rx);

    page.teardown();
    drop(terminal);
    drop(guard);

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    tracing::info!("exit");
    result
}

fn load_startup_settings() -> Settings {
    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    load_settings().unwrap_or_default()
}

fn run(
    page: &mut ModalPage,
    terminal: &mut RatatuiTerminal,
    signal_rx: &Receiver<TerminationSignal>,
) -> io::Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|backend, area| page.render(backend, area))?;
            dirty = false;
        }

        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "termination signal");
            return Ok(());
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }

        let event = into_input_event(crossterm::event::read()?);
        match page.handle_input(&event) {
            EventResult::Quit => return Ok(()),
            EventResult::Consumed => dirty = true,
            EventResult::Ignored => {}
        }
    }
}
