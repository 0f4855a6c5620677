//! Doctors and appointments

use crate::domain::record::{reconcile, Collection, Counter, Document, Record};
use crate::domain::validate::required_text;
use crate::error::{Result, StorekeepError};
use serde::{Deserialize, Serialize};
use std::fmt;

const FIRST_DOCTOR_ID: u64 = 101;
const FIRST_APPOINTMENT_ID: u64 = 1;

/// Status given to every newly booked appointment
pub const STATUS_SCHEDULED: &str = "Scheduled";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u64,
    pub name: String,
    pub specialization: String,
    /// Free-form availability, e.g. "Mon-Fri 9AM-5PM"
    pub timings: String,
}

impl Record for Doctor {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub doctor_id: u64,
    pub doctor_name: String,
    /// Patient details flattened into one line
    pub patient: String,
    pub time: String,
    pub status: String,
}

impl Record for Appointment {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Patient details collected at booking time. Not persisted on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub name: String,
    pub age: u32,
    pub condition: String,
}

impl Patient {
    pub fn new(name: &str, age: u32, condition: &str) -> Result<Self> {
        if age == 0 {
            return Err(StorekeepError::InvalidInput(
                "Age must be positive".to_string(),
            ));
        }
        Ok(Patient {
            name: required_text("Patient name", name)?,
            age,
            condition: required_text("Condition", condition)?,
        })
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Age: {}, Condition: {})",
            self.name, self.age, self.condition
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalDocument {
    #[serde(default)]
    pub doctors: Collection<Doctor>,
    #[serde(default)]
    pub appointments: Collection<Appointment>,
    #[serde(default = "HospitalDocument::doctor_counter")]
    pub next_doctor_id: Counter,
    #[serde(default = "HospitalDocument::appointment_counter")]
    pub next_appointment_id: Counter,
}

impl Default for HospitalDocument {
    fn default() -> Self {
        HospitalDocument {
            doctors: Collection::default(),
            appointments: Collection::default(),
            next_doctor_id: Self::doctor_counter(),
            next_appointment_id: Self::appointment_counter(),
        }
    }
}

impl Document for HospitalDocument {
    const NAME: &'static str = "hospital";

    fn reconcile_counters(&mut self) {
        reconcile(&mut self.next_doctor_id, &self.doctors);
        reconcile(&mut self.next_appointment_id, &self.appointments);
    }
}

impl HospitalDocument {
    fn doctor_counter() -> Counter {
        Counter::starting_at(FIRST_DOCTOR_ID)
    }

    fn appointment_counter() -> Counter {
        Counter::starting_at(FIRST_APPOINTMENT_ID)
    }

    /// Register a doctor under a fresh id
    pub fn add_doctor(&mut self, name: &str, specialization: &str, timings: &str) -> Result<&Doctor> {
        let name = required_text("Doctor name", name)?;
        let specialization = required_text("Specialization", specialization)?;
        let timings = required_text("Timings", timings)?;

        let id = self.next_doctor_id.next_id();
        Ok(self.doctors.add(Doctor {
            id,
            name,
            specialization,
            timings,
        }))
    }

    /// Book an appointment with an existing doctor
    pub fn book_appointment(
        &mut self,
        doctor_id: u64,
        patient: &Patient,
        time: String,
    ) -> Result<&Appointment> {
        let doctor = self
            .doctors
            .find_by_id(doctor_id)
            .ok_or(StorekeepError::RecordNotFound {
                kind: "doctor",
                id: doctor_id,
            })?;
        let doctor_name = doctor.name.clone();

        let id = self.next_appointment_id.next_id();
        Ok(self.appointments.add(Appointment {
            id,
            doctor_id,
            doctor_name,
            patient: patient.to_string(),
            time,
            status: STATUS_SCHEDULED.to_string(),
        }))
    }

    /// Starter data for a fresh workspace
    pub fn seeded() -> Result<Self> {
        let mut doc = HospitalDocument::default();
        doc.add_doctor("Smith", "Cardiology", "Mon, Wed, Fri 10AM-2PM")?;
        doc.add_doctor("Jones", "Pediatrics", "Tue, Thu 9AM-5PM")?;
        Ok(doc)
    }
}
