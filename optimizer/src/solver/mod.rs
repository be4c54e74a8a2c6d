pub mod steepest;
