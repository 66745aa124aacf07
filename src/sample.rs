//! Worked example shown by the shells: a typical dictated doctor's note and
//! the SOAP-format summary it becomes.

pub const SAMPLE_NOTE: &str = "Patient is a 45-year-old male complaining of persistent headaches for the past two weeks. \
Reports no history of migraines but mentions recent increased work stress. \
No nausea or vomiting. Blood pressure today is 140/90 mmHg. \
Neurological exam is unremarkable. No signs of infection or trauma. \
Suspected stress-related tension headaches. Recommended stress management techniques \
and prescribed ibuprofen 400mg as needed. Follow-up in two weeks if symptoms persist.";

pub const SAMPLE_SOAP: &str = "Subjective: 45-year-old male with persistent headaches for two weeks. No history of migraines. Reports increased work stress. No associated nausea or vomiting.\n\n\
Objective: Blood pressure: 140/90 mmHg. Neurological exam unremarkable. No signs of infection or trauma.\n\n\
Assessment: Likely tension headaches due to stress.\n\n\
Plan: Advise stress management techniques. Prescribe ibuprofen 400mg PRN. Follow-up in two weeks if symptoms persist.";
