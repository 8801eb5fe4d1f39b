pub mod prompts;
pub mod render;

pub use prompts::{prompt_cognitive_feedback, prompt_food_portions, prompt_yes_no};
pub use render::{
    display_food_list, display_meal_plan, display_profile, display_score, display_scores,
    display_stats,
};
