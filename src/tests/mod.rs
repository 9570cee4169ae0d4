use super::*;

mod comments;
