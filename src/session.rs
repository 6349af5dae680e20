use std::io::Write;
use std::rc::Rc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

use crate::adapters::ConsolePage;
use crate::board::{Action, Board};
use crate::ports;

const HELP: &str = "\
commands:
  refresh                          reload the activity list
  signup <email> <activity name>   sign up for an activity
  remove <email> <activity name>   unregister a participant
  help                             show this help
  quit                             exit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Signup { email: String, activity: String },
    Remove { email: String, activity: String },
    Help,
    Quit,
}

/// Drives a console board from `input` until it closes or the user quits.
///
/// The initial load completes before the first command is read, so commands
/// can refer to the rendered list. Every command started afterwards runs to
/// completion, pending notification hides included, before this returns.
/// Must be polled inside a `LocalSet`.
pub async fn run_session<A, W, T, R>(
    board: Rc<Board<A, ConsolePage<W>, T>>,
    input: R,
) -> std::io::Result<()>
where
    A: ports::ActivityApi + 'static,
    W: Write + 'static,
    T: ports::TimeProvider,
    R: AsyncBufRead + Unpin,
{
    board.handle(Action::Load).await;

    let mut tasks = JoinSet::new();
    let read = read_commands(&board, input, &mut tasks).await;

    while let Some(joined) = tasks.join_next().await {
        if let Err(err) = joined {
            log::error!("board command failed: {err}");
        }
    }
    read
}

async fn read_commands<A, W, T, R>(
    board: &Rc<Board<A, ConsolePage<W>, T>>,
    input: R,
    tasks: &mut JoinSet<()>,
) -> std::io::Result<()>
where
    A: ports::ActivityApi + 'static,
    W: Write + 'static,
    T: ports::TimeProvider,
    R: AsyncBufRead + Unpin,
{
    let page = board.page();
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                page.print_line(&format!("error: {err}"));
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => page.print_line(HELP),
            Command::Refresh => dispatch(tasks, board, Action::Load),
            Command::Signup { email, activity } => {
                if page.fill_signup_form(&email, &activity) {
                    dispatch(tasks, board, Action::SubmitSignup);
                } else {
                    page.print_line(&format!("error: '{activity}' is not a listed activity"));
                }
            }
            Command::Remove { email, activity } => match page.removal_control(&activity, &email) {
                Some(target) => dispatch(tasks, board, Action::RemoveParticipant(target)),
                None => page.print_line(&format!("error: {email} is not listed under '{activity}'")),
            },
        }
    }
    Ok(())
}

fn dispatch<A, W, T>(tasks: &mut JoinSet<()>, board: &Rc<Board<A, ConsolePage<W>, T>>, action: Action)
where
    A: ports::ActivityApi + 'static,
    W: Write + 'static,
    T: ports::TimeProvider,
{
    let board = Rc::clone(board);
    tasks.spawn_local(async move {
        board.handle(action).await;
    });
}

pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "" => Ok(None),
        "refresh" => Ok(Some(Command::Refresh)),
        "help" => Ok(Some(Command::Help)),
        "quit" | "exit" => Ok(Some(Command::Quit)),
        "signup" => {
            let (email, activity) = participant_args(word, rest)?;
            Ok(Some(Command::Signup { email, activity }))
        }
        "remove" => {
            let (email, activity) = participant_args(word, rest)?;
            Ok(Some(Command::Remove { email, activity }))
        }
        other => Err(format!("unknown command '{other}'; try 'help'")),
    }
}

fn participant_args(command: &str, rest: &str) -> Result<(String, String), String> {
    let usage = || format!("usage: {command} <email> <activity name>");
    let (email, activity) = rest.split_once(char::is_whitespace).ok_or_else(usage)?;
    let activity = activity.trim();
    if email.is_empty() || activity.is_empty() {
        return Err(usage());
    }
    Ok((email.to_string(), activity.to_string()))
}
