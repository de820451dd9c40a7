// Résumé CRUD: owner-scoped create/read/update/delete over the `ResumeStore`.

pub mod handlers;
pub mod validation;
