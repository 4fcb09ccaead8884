use super::OpcodeSlot;

/// Fields of one initializer entry, empty for an unused slot.
pub fn format_slot(slot: &OpcodeSlot) -> String {
    slot.to_string()
}

/// Brace-delimited entries separated by `,\n`, ready to be spliced into
/// an array initializer. Unused slots render as `{  }`.
pub fn format_slots(slots: &[OpcodeSlot]) -> String {
    let entries: Vec<String> = slots.iter().map(format_slot).collect();
    format!("{{ {} }}", entries.join(" },\n{ "))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::opcodes::OpcodeRecord;

    #[test]
    fn test_format_empty_slot() {
        assert_eq!(format_slot(&OpcodeSlot::Empty), "");
    }

    #[test]
    fn test_format_defined_slot() {
        let slot = OpcodeSlot::Defined(OpcodeRecord::new(0xc0, "RET NZ", "1", "20", "8"));
        assert_eq!(format_slot(&slot), "0xc0, 1, 8, 20, \"RET NZ\"");
    }

    #[test]
    fn test_format_slots() {
        let slots = vec![
            OpcodeSlot::Defined(OpcodeRecord::new(0x00, "NOP", "1", "4", "4")),
            OpcodeSlot::Empty,
        ];
        assert_eq!(format_slots(&slots), "{ 0x0, 1, 4, 4, \"NOP\" },\n{  }");
    }

    #[test]
    fn test_format_no_slots() {
        assert_eq!(format_slots(&[]), "{  }");
    }

    #[test]
    fn test_no_trailing_separator() {
        let slots = vec![OpcodeSlot::Empty, OpcodeSlot::Empty, OpcodeSlot::Empty];
        let text = format_slots(&slots);
        assert_eq!(text, "{  },\n{  },\n{  }");
        assert!(!text.ends_with('\n'));
    }
}
