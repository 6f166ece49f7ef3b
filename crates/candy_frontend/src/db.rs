use crate::{input::DeclarationDbStorage, lowering::AstToHirStorage, signatures::SignatureDbStorage};

/// The compiler database: every query group plus the salsa runtime.
#[salsa::database(DeclarationDbStorage, SignatureDbStorage, AstToHirStorage)]
#[derive(Default)]
pub struct CandyDatabase {
  storage: salsa::Storage<Self>,
}

impl salsa::Database for CandyDatabase {}
