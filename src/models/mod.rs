pub mod ocr_model;
