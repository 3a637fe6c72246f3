use crate::global_constants::{USER_MESSAGE_ANALYZING, USER_MESSAGE_ANALYZING_DETAIL};

pub fn render_loading_view() -> String {
    format!(
        "┌──────────────────────────┐\n\
         │ ISO: AUTO                │\n\
         │        [ scanning ]      │\n\
         │                AF-C [ . ]│\n\
         └──────────────────────────┘\n\
         {}\n{}\n",
        USER_MESSAGE_ANALYZING, USER_MESSAGE_ANALYZING_DETAIL
    )
}
