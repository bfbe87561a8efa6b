//! The main loop and the command dispatcher.
//!
//! [`dispatch`] feeds one message into the [`App`] and carries out the
//! returned [`Command`]s in FIFO order. It knows nothing about terminals or
//! threads, so it runs the same against the real draw timer and against a
//! recording [`Scheduler`] in tests. [`run`] is the terminal-backed loop.

use crate::actor::{InputActor, InputEvent, TickTimer, TickerActor};
use crate::app::{App, Command, Message};
use crate::config::RuntimeConfig;
use crate::sim::DrawSource;
use crate::terminal::Terminal;
use crossbeam_channel::{bounded, select};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Receives requests to deliver [`Message::Tick`] after a delay.
pub trait Scheduler {
    /// Arrange for one tick after `delay`.
    fn schedule_tick(&mut self, delay: Duration);
}

/// Whether the loop should go on after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Feed `msg` to `app` and carry out everything it asks for.
///
/// Follow-up messages are handled before this returns, in the order they
/// were requested.
pub fn dispatch<D, S>(app: &mut App<D>, msg: Message, now: Instant, scheduler: &mut S) -> Flow
where
    D: DrawSource,
    S: Scheduler + ?Sized,
{
    let command = app.update(msg, now);
    execute(app, command, now, scheduler)
}

/// Carry out `command` and whatever it leads to, FIFO.
pub fn execute<D, S>(app: &mut App<D>, command: Command, now: Instant, scheduler: &mut S) -> Flow
where
    D: DrawSource,
    S: Scheduler + ?Sized,
{
    let mut commands = VecDeque::from([command]);

    while let Some(command) = commands.pop_front() {
        match command {
            Command::None => {}
            Command::Quit => return Flow::Quit,
            Command::ScheduleTick(delay) => scheduler.schedule_tick(delay),
            Command::Msg(msg) => commands.push_back(app.update(msg, now)),
            Command::Batch(batch) => commands.extend(batch),
        }
    }
    Flow::Continue
}

/// What woke the main loop.
enum Wake {
    Message(Message),
    Repaint,
    Closed,
}

/// Run the simulator in the terminal until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or written to, or if
/// a worker thread cannot be spawned.
pub fn run<D: DrawSource>(app: &mut App<D>, config: &RuntimeConfig) -> io::Result<()> {
    let mut terminal = Terminal::enter(config)?;
    let (width, height) = terminal.size();
    dispatch(app, Message::Resize { width, height }, Instant::now(), &mut NoTicks);

    let (input_tx, input_rx) = bounded::<InputEvent>(64);
    let input = InputActor::spawn(input_tx, config.input_poll_timeout)?;
    let repaint = TickerActor::spawn(config.repaint_interval)?;
    let mut timer = TickTimer::new();

    info!("main loop started");
    terminal.draw(&app.view(Instant::now()))?;

    loop {
        let tick_rx = timer.receiver().clone();
        let wake = select! {
            recv(input_rx) -> event => match event {
                Ok(InputEvent::Key { code, modifiers }) => Wake::Message(Message::Key { code, modifiers }),
                Ok(InputEvent::Paste(text)) => Wake::Message(Message::Paste(text)),
                Ok(InputEvent::Resize { width, height }) => {
                    terminal.resize(width, height);
                    Wake::Message(Message::Resize { width, height })
                }
                Ok(InputEvent::Error(e)) => {
                    warn!(error = %e, "input error");
                    Wake::Repaint
                }
                Ok(InputEvent::Shutdown) | Err(_) => Wake::Closed,
            },
            recv(tick_rx) -> _ => {
                timer.fired();
                Wake::Message(Message::Tick)
            },
            recv(repaint.receiver()) -> _ => Wake::Repaint,
        };

        match wake {
            Wake::Message(message) => {
                if dispatch(app, message, Instant::now(), &mut timer) == Flow::Quit {
                    break;
                }
            }
            Wake::Repaint => {}
            Wake::Closed => {
                debug!("input channel closed");
                break;
            }
        }
        terminal.draw(&app.view(Instant::now()))?;
    }

    info!("main loop finished");
    input.join();
    repaint.join();
    Ok(())
}

/// Drops tick requests; used before the draw timer exists.
struct NoTicks;

impl Scheduler for NoTicks {
    fn schedule_tick(&mut self, _delay: Duration) {}
}
