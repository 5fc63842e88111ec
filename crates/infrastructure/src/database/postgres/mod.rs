mod pg_identifier_resolver;
mod postgres_doctor_repository;
mod postgres_patient_repository;
mod postgres_task_repository;

pub use pg_identifier_resolver::PgIdentifierResolver;
pub use postgres_doctor_repository::PostgresDoctorRepository;
pub use postgres_patient_repository::PostgresPatientRepository;
pub use postgres_task_repository::PostgresTaskRepository;
