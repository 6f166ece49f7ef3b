pub mod db;
pub mod input;
pub mod lowering;
pub mod signatures;

pub use db::CandyDatabase;
pub use input::DeclarationDb;
pub use lowering::AstToHir;
pub use signatures::SignatureDb;
