//! 测试辅助：记录型内存仓储与静态解析器

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use medgen_domain::{
    ClinicalTask, Doctor, DoctorRepository, EntityKind, IdentifierResolver, MedgenError,
    MedgenResult, Patient, PatientRepository, TaskRepository, TaskStatus,
};

/// 记录每次成功插入的任务，可配置在第 N 次调用时失败
#[derive(Default)]
pub struct InMemoryTaskRepository {
    pub tasks: Mutex<Vec<ClinicalTask>>,
    attempts: AtomicUsize,
    fail_on_attempt: Option<usize>,
    fail_always: bool,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(attempt: usize) -> Self {
        Self {
            fail_on_attempt: Some(attempt),
            ..Self::default()
        }
    }

    pub fn always_failing() -> Self {
        Self {
            fail_always: true,
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<ClinicalTask> {
        self.tasks.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &ClinicalTask) -> MedgenResult<ClinicalTask> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_always || self.fail_on_attempt == Some(attempt) {
            return Err(MedgenError::database_error("simulated write failure"));
        }

        let mut tasks = self.tasks.lock().unwrap();
        let mut created = task.clone();
        created.id = tasks.len() as i64 + 1;
        tasks.push(created.clone());
        Ok(created)
    }

    async fn count_by_status(&self, status: TaskStatus) -> MedgenResult<i64> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks.iter().filter(|t| t.status == status).count() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryDoctorRepository {
    pub doctors: Mutex<Vec<Doctor>>,
    fail_on_attempt: Option<usize>,
    attempts: AtomicUsize,
}

impl InMemoryDoctorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn create(&self, doctor: &Doctor) -> MedgenResult<Doctor> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_on_attempt == Some(attempt) {
            return Err(MedgenError::database_error("simulated write failure"));
        }

        let mut doctors = self.doctors.lock().unwrap();
        let mut created = doctor.clone();
        created.id = doctors.len() as i64 + 1;
        doctors.push(created.clone());
        Ok(created)
    }

    async fn count(&self) -> MedgenResult<i64> {
        Ok(self.doctors.lock().unwrap().len() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryPatientRepository {
    pub patients: Mutex<Vec<Patient>>,
    fail_on_attempt: Option<usize>,
    attempts: AtomicUsize,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(attempt: usize) -> Self {
        Self {
            fail_on_attempt: Some(attempt),
            ..Self::default()
        }
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn create(&self, patient: &Patient) -> MedgenResult<Patient> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_on_attempt == Some(attempt) {
            return Err(MedgenError::database_error("simulated write failure"));
        }

        let mut patients = self.patients.lock().unwrap();
        let mut created = patient.clone();
        created.id = patients.len() as i64 + 1;
        patients.push(created.clone());
        Ok(created)
    }

    async fn count(&self) -> MedgenResult<i64> {
        Ok(self.patients.lock().unwrap().len() as i64)
    }
}

/// 返回固定标识符列表的解析器
pub struct StaticResolver {
    pub doctor_ids: Vec<i64>,
    pub patient_ids: Vec<i64>,
}

#[async_trait]
impl IdentifierResolver for StaticResolver {
    async fn resolve(&self, kind: EntityKind) -> MedgenResult<Vec<i64>> {
        match kind {
            EntityKind::Doctor => Ok(self.doctor_ids.clone()),
            EntityKind::Patient => Ok(self.patient_ids.clone()),
        }
    }
}
