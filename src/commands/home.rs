use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::libs::screen::Screen;
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut app = App::init()?;
    if app.visit_milestone() {
        msg_success!(Message::VisitMilestone(app.visit_count));
    }
    let view = app.navigate_to(Screen::Home);
    View::screen(&view)
}
