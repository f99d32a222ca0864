use std::{
    borrow::Cow,
    env, fs,
    io::{self, BufRead, Write},
    process,
};

use tally_application::Session;
use tally_domain::{BillSplit, Friend, FriendId, Money, Roster};
use tally_parser::{parse_command, Command, Payer as ParsedPayer};
use tally_presentation::{RosterPresenter, SplitPresenter};

type CliResult<T> = Result<T, Cow<'static, str>>;

/// Default avatar service, as used for new friends without an explicit image.
const DEFAULT_IMAGE: &str = "https://i.pravatar.cc/48";

const HELP: &str = "Commands:\n\
  friends                        show the roster and balances\n\
  add <name> [image]             add a friend (quote names with spaces)\n\
  select <id>                    select or deselect a friend\n\
  split <total> <paid> user|friend\n\
                                 split a bill with the selected friend\n\
  help                           show this help\n\
  quit                           leave";

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let mut session = demo_session();

    match env::args().nth(1) {
        Some(path) => run_script(&mut session, &path),
        None => run_repl(&mut session),
    }
}

/// The roster a fresh session starts from.
fn demo_session() -> Session {
    Session::with_roster(Roster::with_friends([
        Friend::new(
            FriendId(118836),
            "Clark",
            "https://i.pravatar.cc/48?u=118836",
            Money::from_i64(-7),
        ),
        Friend::new(
            FriendId(933372),
            "Sarah",
            "https://i.pravatar.cc/48?u=933372",
            Money::from_i64(20),
        ),
        Friend::new(
            FriendId(499476),
            "Anthony",
            "https://i.pravatar.cc/48?u=499476",
            Money::ZERO,
        ),
    ]))
}

/// Executes a script file command by command. The first failing command
/// aborts the run, since later commands likely depend on it.
fn run_script(session: &mut Session, path: &str) -> CliResult<()> {
    let source =
        fs::read_to_string(path).map_err(|err| format!("Failed to read '{path}': {err}"))?;

    for (line_no, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match dispatch(session, line) {
            Ok(Dispatch::Output(output)) => println!("{output}"),
            Ok(Dispatch::Quit) => break,
            Err(message) => {
                return Err(format!("line {}: {message}", line_no + 1).into());
            }
        }
    }

    tracing::debug!(path, "script executed");
    Ok(())
}

/// Interactive loop. Command errors are printed and the session keeps
/// going; every one of them is user-correctable.
fn run_repl(session: &mut Session) -> CliResult<()> {
    println!("tally - split bills with your friends (`help` for commands)");
    println!("{}", RosterPresenter::render(session.roster(), session.selection()));

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("tally> ");
        io::stdout()
            .flush()
            .map_err(|err| format!("Failed to flush stdout: {err}"))?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|err| format!("Failed to read input: {err}"))?;
        if read == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match dispatch(session, trimmed) {
            Ok(Dispatch::Output(output)) => println!("{output}"),
            Ok(Dispatch::Quit) => break,
            Err(message) => eprintln!("{message}"),
        }
    }

    Ok(())
}

enum Dispatch {
    Output(String),
    Quit,
}

fn dispatch(session: &mut Session, line: &str) -> Result<Dispatch, String> {
    let command = parse_command(line).map_err(|err| err.to_string())?;

    match command {
        Command::Friends => Ok(Dispatch::Output(RosterPresenter::render(
            session.roster(),
            session.selection(),
        ))),
        Command::AddFriend { name, image } => add_friend(session, name, image),
        Command::Select(id) => select_friend(session, FriendId(id)),
        Command::Split {
            total,
            paid_by_user,
            payer,
        } => split_bill(
            session,
            BillSplit {
                total: Money::from_decimal(total),
                paid_by_user: Money::from_decimal(paid_by_user),
                payer: match payer {
                    ParsedPayer::User => tally_domain::Payer::User,
                    ParsedPayer::Friend => tally_domain::Payer::Friend,
                },
            },
        ),
        Command::Help => Ok(Dispatch::Output(HELP.to_string())),
        Command::Quit => Ok(Dispatch::Quit),
    }
}

fn add_friend(
    session: &mut Session,
    name: &str,
    image: Option<&str>,
) -> Result<Dispatch, String> {
    // The `add` command is the whole add-friend flow: open the panel,
    // submit the form. A validation error leaves the panel open.
    if !session.add_friend_panel_open() {
        session.toggle_add_friend();
    }

    let friend = session
        .add_friend(name, image.unwrap_or(DEFAULT_IMAGE))
        .map_err(|err| err.to_string())?;
    Ok(Dispatch::Output(format!(
        "Added {} (id {})",
        friend.name(),
        friend.id()
    )))
}

fn select_friend(session: &mut Session, id: FriendId) -> Result<Dispatch, String> {
    if !session.roster().contains(id) {
        return Err(format!("No friend with id {id}"));
    }

    match session.select_friend(id) {
        Some(selected) => {
            let Some(friend) = session.roster().get(selected) else {
                return Err(format!("No friend with id {selected}"));
            };
            Ok(Dispatch::Output(SplitPresenter::selection_header(friend)))
        }
        None => Ok(Dispatch::Output("Selection cleared".to_string())),
    }
}

fn split_bill(session: &mut Session, split: BillSplit) -> Result<Dispatch, String> {
    let outcome = session.split_bill(split).map_err(|err| err.to_string())?;
    let Some(friend) = session.roster().get(outcome.friend_id) else {
        return Err(format!("No friend with id {}", outcome.friend_id));
    };
    Ok(Dispatch::Output(SplitPresenter::outcome(friend, &outcome)))
}
