//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{split_blocks, Extractor, ExtractorConfig, RawBlock, TimeFormat};
    use chrono::{NaiveDate, NaiveTime};

    const RECRUITER_MESSAGE: &str = "\
Jane Doe (She/Her)  3:45 PM
· 2nd
Talent Partner at Mollie
Mar 7
Hi Nikita,
We are hiring Python engineers, 80k to €120K, see https://mollie.com/jobs 🚀
Reach me at jane@mollie.com";

    const TEMPLATE_MESSAGE: &str = "\
Bob Smith sent the following messages at 9:05 AM
Dec 12, 2022
Hello,
An exciting opportunity at Elastic and Tessian. Budget 90k, 90k fixed.";

    fn create_test_extractor() -> Extractor {
        Extractor::new(ExtractorConfig::default())
            .unwrap()
            .with_reference_date(NaiveDate::from_ymd_opt(2023, 6, 20).unwrap())
    }

    #[test]
    fn test_full_extraction_flow() {
        let extractor = create_test_extractor();
        let record = extractor.extract(&RawBlock::new(1, RECRUITER_MESSAGE)).unwrap();

        assert_eq!(record.sender_name, "Jane Doe");
        assert_eq!(record.sender_title, "Talent Partner at Mollie");
        assert_eq!(record.sender_pronouns, "she");
        assert!(record.has_name);
        assert!(!record.read_cv);
        assert!(!record.autogenerated);
        assert_eq!(record.salary.low, "80");
        assert_eq!(record.salary.high, "120");
        assert!(record.has_emoji);
        assert!(record.has_email);
        assert!(record.has_url);
        assert_eq!(record.company, "Mollie");
        assert!(record.python);
        assert_eq!(record.chars, RECRUITER_MESSAGE.chars().count());
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2023, 3, 7).unwrap());
        assert_eq!(record.time, NaiveTime::from_hms_opt(15, 45, 0).unwrap());
    }

    #[test]
    fn test_template_message() {
        let extractor = create_test_extractor();
        let record = extractor.extract(&RawBlock::new(1, TEMPLATE_MESSAGE)).unwrap();

        assert_eq!(record.sender_name, "Bob Smith");
        assert_eq!(record.sender_title, "");
        assert_eq!(record.sender_pronouns, "");
        assert!(!record.has_name);
        assert!(record.autogenerated);
        assert_eq!(record.salary.low, "");
        assert_eq!(record.salary.high, "90");
        assert!(!record.has_emoji);
        assert!(!record.has_email);
        assert!(!record.has_url);
        assert_eq!(record.company, "Elastic");
        assert!(!record.python);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2022, 12, 12).unwrap());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = create_test_extractor();
        let block = RawBlock::new(1, RECRUITER_MESSAGE);
        assert_eq!(extractor.extract(&block).unwrap(), extractor.extract(&block).unwrap());
    }

    #[test]
    fn test_json_line_legacy_and_fixed_time() {
        let block = RawBlock::new(1, RECRUITER_MESSAGE);

        let legacy = create_test_extractor();
        let line = legacy.extract_json_line(&block).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["time"], "15:03");
        assert_eq!(value["date"], "2023-03-07");

        let mut config = ExtractorConfig::default();
        config.time_format = TimeFormat::Fixed;
        let fixed = Extractor::new(config)
            .unwrap()
            .with_reference_date(NaiveDate::from_ymd_opt(2023, 6, 20).unwrap());
        let line = fixed.extract_json_line(&block).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["time"], "15:45");
    }

    #[test]
    fn test_custom_reference_data() {
        let mut config = ExtractorConfig::default();
        config.self_name_tokens = ["Alex".to_string()].into_iter().collect();
        config.nickname_tokens = ["Lex".to_string()].into_iter().collect();
        config.known_companies = ["Initech".to_string()].into_iter().collect();
        let extractor = Extractor::new(config)
            .unwrap()
            .with_reference_date(NaiveDate::from_ymd_opt(2023, 6, 20).unwrap());

        let text = "Sam Lee  10:15 AM\nJan 3\nHey Lex, Initech read your CV";
        let record = extractor.extract(&RawBlock::new(1, text)).unwrap();
        assert!(record.has_name);
        assert!(record.read_cv);
        assert!(!record.autogenerated);
        assert_eq!(record.company, "Initech");
    }

    #[test]
    fn test_archive_of_two_blocks() {
        let extractor = create_test_extractor();
        let archive = format!("{}\n\n\n\n\n{}\n", RECRUITER_MESSAGE, TEMPLATE_MESSAGE);

        let lines: Vec<String> = split_blocks(&archive)
            .iter()
            .map(|block| extractor.extract_json_line(block).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(first["sender_name"], "Jane Doe");
        assert_eq!(second["sender_name"], "Bob Smith");
        assert_eq!(first.as_object().unwrap().len(), 16);
        assert_eq!(second.as_object().unwrap().len(), 16);
    }
}
