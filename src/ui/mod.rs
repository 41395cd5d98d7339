pub mod layout;

mod create_question;
mod exams;
mod menu;
mod notes;
mod solutions;

pub use create_question::draw_create_question;
pub use exams::draw_exams;
pub use layout::calculate_create_question_chunks;
pub use menu::{draw_menu, MENU_ITEMS};
pub use notes::{draw_note_editor, draw_notes};
pub use solutions::draw_solutions;
