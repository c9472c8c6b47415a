mod home;
mod patient_detail;
mod predictor;
mod search_cases;
mod search_patients;
mod trends;

pub use home::HomePage;
pub use patient_detail::PatientDetailPage;
pub use predictor::PredictorPage;
pub use search_cases::SearchCasesPage;
pub use search_patients::SearchPatientsPage;
pub use trends::TrendsPage;
