pub mod a030_survey;
