// repl.rs — The readline command loop.
//
// Each line is one button press on the remote. The loop holds the session
// lock only for the duration of a single transition, so the create flow's
// suspended naming call never blocks the other buttons.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use rtv_session::{create_goal, SharedSession, TuneDirection, View};
use rtv_tuner::TunerClient;

use crate::screen;

const HELP: &str = "\
  power            flip the power switch
  up / down        turn the channel knob (150ms retune)
  sel <id>         tune straight to a goal by id
  ch <n>           channel selector (1-based)
  vol <n>          volume dial, 0-10
  mute             flip the mute switch
  view <name>      guide | channel | create
  tick <delta>     advance the tuned goal
  add <text>       auto-tune a new broadcast from your goal
  guide            redraw the screen
  quit             power down for the night";

/// Run the remote-control loop until EOF or `quit`.
pub async fn run(session: &SharedSession, tuner: &TunerClient) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("{}", screen::render(&*session.lock().await));

    loop {
        match rl.readline("rtv> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                if !dispatch(session, tuner, &line).await {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Handle one command line. Returns false when the loop should exit.
async fn dispatch(session: &SharedSession, tuner: &TunerClient, line: &str) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "power" => session.lock().await.toggle_power(),
        "up" | "down" => {
            let direction = if command == "up" {
                TuneDirection::Up
            } else {
                TuneDirection::Down
            };
            let request = session.lock().await.navigate_channel(direction);
            if let Some(request) = request {
                // Static first, picture after the retune delay.
                tokio::time::sleep(request.delay).await;
                session.lock().await.complete_tune(request);
            }
        }
        "sel" => {
            if !session.lock().await.select_channel(rest) {
                println!("  no such broadcast: {rest}");
            }
        }
        "ch" => match rest.parse::<usize>() {
            Ok(n) if n > 0 => session.lock().await.set_channel_direct(n - 1),
            _ => println!("  usage: ch <number>"),
        },
        "vol" => match rest.parse::<u8>() {
            Ok(v) => session.lock().await.set_volume(v),
            Err(_) => println!("  usage: vol <0-10>"),
        },
        "mute" => session.lock().await.toggle_mute(),
        "view" => match rest {
            "guide" => session.lock().await.set_view(View::Guide),
            "channel" => session.lock().await.set_view(View::Channel),
            "create" => session.lock().await.set_view(View::Create),
            _ => println!("  usage: view <guide|channel|create>"),
        },
        "tick" => match rest.parse::<u32>() {
            Ok(delta) => {
                if let Err(err) = session.lock().await.update_active_goal_progress(delta) {
                    println!("  {err}");
                }
            }
            Err(_) => println!("  usage: tick <delta>"),
        },
        "add" => {
            if create_goal(session, tuner, rest).await.is_none() {
                println!("  nothing to broadcast — give the goal a name");
            }
        }
        "guide" => {}
        "help" => {
            println!("{HELP}");
            return true;
        }
        "quit" | "exit" => return false,
        other => {
            println!("  unknown button: {other} (try `help`)");
            return true;
        }
    }

    println!("{}", screen::render(&*session.lock().await));
    true
}
