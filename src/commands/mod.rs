pub mod password_gen;
