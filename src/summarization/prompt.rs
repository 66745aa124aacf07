//! The fixed two-message instruction sent to the text-generation provider.

/// System message establishing the assistant persona.
pub const SYSTEM_MESSAGE: &str = "You are a medical assistant.";

/// User message embedding the transcript in the SOAP conversion template.
pub fn soap_request(transcript: &str) -> String {
    format!(
        "You are a medical assistant. Convert the following doctor's note into a structured SOAP format (Subjective, Objective, Assessment, Plan):\n\n{}\n",
        transcript
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soap_request_embeds_transcript() {
        let prompt = soap_request("Patient reports headache.");
        assert!(prompt.contains("Patient reports headache."));
        assert!(prompt.contains("SOAP format"));
        assert!(prompt.contains("Subjective, Objective, Assessment, Plan"));
    }

    #[test]
    fn test_soap_request_accepts_empty_transcript() {
        let prompt = soap_request("");
        assert!(prompt.contains("SOAP format"));
        assert!(prompt.ends_with("\n\n\n"));
    }
}
