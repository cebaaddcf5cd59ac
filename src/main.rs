//! lessonplanner main entrypoint.

use lessonplanner::run;
use lessonplanner::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
