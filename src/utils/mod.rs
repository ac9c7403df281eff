pub mod text_rules;
