mod end_faces;

pub use end_faces::{DetectEndFaces, EndFaceMatch};
