/// Texte prononcé pour une valeur du compte à rebours.
pub fn utterance_for(value: u32) -> String {
    match value {
        0 => "Launch!".to_string(),
        1 => "One... Ignition starting.".to_string(),
        n => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utterances() {
        assert_eq!(utterance_for(10), "10");
        assert_eq!(utterance_for(2), "2");
        assert_eq!(utterance_for(1), "One... Ignition starting.");
        assert_eq!(utterance_for(0), "Launch!");
    }
}
