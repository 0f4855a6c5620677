//! Hospital use cases: doctors and appointments

use crate::domain::hospital::{Appointment, Doctor, HospitalDocument, Patient};
use crate::domain::validate::timestamp_now;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, StoreSession, WorkspaceRepository};

/// Service for the hospital appointment tracker
pub struct HospitalService {
    session: StoreSession<HospitalDocument>,
}

impl HospitalService {
    pub fn new(session: StoreSession<HospitalDocument>) -> Self {
        HospitalService { session }
    }

    /// Open the hospital data file named in the workspace config
    pub fn open(repository: &FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let store = repository.store(&config.files.hospital);
        Ok(Self::new(StoreSession::open(store)))
    }

    pub fn add_doctor(&mut self, name: &str, specialization: &str, timings: &str) -> Result<Doctor> {
        let doctor = self
            .session
            .commit(|doc| doc.add_doctor(name, specialization, timings).cloned())?;
        tracing::info!(doctor_id = doctor.id, "Added doctor");
        Ok(doctor)
    }

    pub fn book_appointment(&mut self, doctor_id: u64, patient: &Patient) -> Result<Appointment> {
        let appointment = self.session.commit(|doc| {
            doc.book_appointment(doctor_id, patient, timestamp_now())
                .cloned()
        })?;
        tracing::info!(
            appointment_id = appointment.id,
            doctor_id = doctor_id,
            "Booked appointment"
        );
        Ok(appointment)
    }

    /// Look up a doctor for display alongside a booking
    pub fn doctor(&self, doctor_id: u64) -> Option<&Doctor> {
        self.session.document().doctors.find_by_id(doctor_id)
    }

    pub fn doctors(&self) -> &[Doctor] {
        self.session.document().doctors.as_slice()
    }

    pub fn appointments(&self) -> &[Appointment] {
        self.session.document().appointments.as_slice()
    }
}
