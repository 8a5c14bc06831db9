// screen.rs — Text rendering of the tube.
//
// One function per screen, all pure string builders so they are easy to
// eyeball in tests. A powered-off set renders the dead tube regardless of
// the stored view.

use rtv_goal::Goal;
use rtv_session::{Session, View};

/// Render whatever the tube is currently showing.
pub fn render(session: &Session) -> String {
    if !session.state().is_on {
        return "  [ tube dark — hit `power` ]".to_string();
    }
    match session.state().view {
        View::Guide => render_guide(session),
        View::Channel => render_channel(session),
        View::Create => "  NEW BROADCAST — `add <your goal>` to auto-tune a show".to_string(),
    }
}

fn render_guide(session: &Session) -> String {
    if session.goals().is_empty() {
        return "  ~~~ NO SIGNAL ~~~".to_string();
    }
    let mut out = String::from("  ======= TV GUIDE =======\n");
    for (i, goal) in session.goals().iter().enumerate() {
        let marker = if i == session.state().current_channel_index {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!(
            "  {marker} CH {:02}  [{:<11}] {:<20} {} {:>3}%\n",
            i + 1,
            goal.category.to_string(),
            goal.title,
            progress_bar(goal),
            goal.progress(),
        ));
    }
    out
}

fn render_channel(session: &Session) -> String {
    match session.active_goal() {
        Some(goal) => format!(
            "  CH {:02} — {} [{}]\n  {}\n  {} {}/{} ({}%){}",
            session.state().current_channel_index + 1,
            goal.title,
            goal.category,
            goal.description,
            progress_bar(goal),
            goal.current_steps,
            goal.total_steps,
            goal.progress(),
            if goal.is_complete() {
                "  ** SERIES FINALE **"
            } else {
                ""
            },
        ),
        None => "  ~~~ NO SIGNAL ~~~".to_string(),
    }
}

fn progress_bar(goal: &Goal) -> String {
    let filled = (goal.progress() as usize) / 10;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}
