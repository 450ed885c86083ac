pub mod stage1_intake;
pub mod stage2_categories;
pub mod stage3_composite;
pub mod stage4_insights;
pub mod stage5_report;
