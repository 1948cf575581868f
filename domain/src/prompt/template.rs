//! Prompt templates for conversation and meal analysis

/// Templates for generating prompts for each kind of request
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction sent alongside an uploaded meal photo
    pub fn meal_analysis() -> &'static str {
        r#"As your personal Calorie Doctor, I'm here to help you understand the nutritional content of your food.
Please review the image of your meal and answer the following questions:

1. Based on the image, is this food healthy? I will provide you with a detailed analysis of the nutritional content and factors affecting the healthiness of the food.
2. Calculate the total calorie count for the food items in the image. I'll provide you with the total calories and a breakdown of each item with its calorie content.

Let's get started on keeping your diet in check!"#
    }

    /// Steering prompt embedding the flattened conversation context
    pub fn continue_conversation(context: &str) -> String {
        format!(
            "Continue the conversation based on the following context: {}",
            context
        )
    }
}
