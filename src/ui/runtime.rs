use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::config::Config;
use crate::submission::{HttpTransport, SubmissionWorker};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::scene::SceneState;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(100);
/// Redraw interval while confetti or an overlay is moving.
const FRAME_RATE: Duration = Duration::from_millis(40);
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

pub fn run(config: &Config, scene: SceneState) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("submission")
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let transport = HttpTransport::new(&config.endpoint)?;
    tracing::info!(target: "runtime", endpoint = transport.endpoint(), "starting session");

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(TICK_RATE);
    let report_tx = events.sender();
    let submit_tx = SubmissionWorker::spawn(runtime.handle(), transport, move |report| {
        let _ = report_tx.send(AppEvent::SubmissionFinished(report));
    });

    let mut app = App::new(scene, config.timings.clone());
    app.set_submit_sender(submit_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        let now = Instant::now();
        terminal.draw(|frame| draw(frame, &app, now))?;
        if app.should_quit() {
            break;
        }

        let timeout = if app.is_animating() { FRAME_RATE } else { TICK_RATE };
        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::SubmissionFinished(report)) => {
                app.on_submission_report(report, Instant::now())
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    if app.in_flight() {
        tracing::info!(target: "runtime", "quitting with a submission in flight");
    }
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    Ok(())
}
