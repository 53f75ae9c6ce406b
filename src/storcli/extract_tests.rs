/// Tests for the index-keyed VD/PD extractor and WWN derivation.
/// The truncation-at-first-gap behavior is a contract, not a bug; the
/// tests here pin it.

#[cfg(test)]
mod extract_tests {
    use serde_json::{json, Value};
    use test_case::test_case;

    use super::super::extract::{extract_virtual_drives, wwn_from_naa, WWN_PREFIX};
    use super::super::response::{decode_report, ControllerEntry};
    use crate::ProbeError;

    /// Build a controller whose response map holds contiguous VD/PD pairs
    /// for indices 0..count, NAA ids "naa{i}", first-PD media "SSD".
    fn controller_with_vds(count: usize) -> ControllerEntry {
        let mut response_data = serde_json::Map::new();
        for i in 0..count {
            response_data.insert(
                format!("VD{i} Properties"),
                json!({ "Strip Size": "64 KB", "SCSI NAA Id": format!("naa{i}") }),
            );
            response_data.insert(
                format!("PDs for VD {i}"),
                json!([{ "State": "Onln", "Med": "SSD" }]),
            );
        }
        controller_from(Value::Object(response_data))
    }

    fn controller_from(response_data: Value) -> ControllerEntry {
        serde_json::from_value(json!({
            "Command Status": {
                "Controller": 0,
                "Status": "Success",
                "Description": "None"
            },
            "Response Data": response_data
        }))
        .unwrap()
    }

    #[test]
    fn test_wwn_from_naa_prefixes() {
        assert_eq!(
            wwn_from_naa("6a416e7a06f9600027d34e94a257db13"),
            "wwn-0x6a416e7a06f9600027d34e94a257db13"
        );
    }

    #[test]
    fn test_wwn_from_naa_preserves_case() {
        assert_eq!(wwn_from_naa("ABC123def"), "wwn-0xABC123def");
    }

    #[test]
    fn test_wwn_from_naa_empty_input() {
        // Unguarded by design: matches nothing downstream
        assert_eq!(wwn_from_naa(""), WWN_PREFIX);
    }

    #[test_case(0; "no virtual drives")]
    #[test_case(1; "single virtual drive")]
    #[test_case(3; "several virtual drives")]
    fn test_contiguous_indices_all_extracted(count: usize) {
        let ctl = controller_with_vds(count);
        let drives = extract_virtual_drives(&ctl).unwrap();

        assert_eq!(drives.len(), count);
        for (i, vd) in drives.iter().enumerate() {
            assert_eq!(vd.identifier, format!("wwn-0xnaa{i}"));
            assert_eq!(vd.media_type, "SSD");
        }
    }

    #[test]
    fn test_scan_stops_at_first_gap() {
        // Indices 0 and 1 complete, 2 absent, 3 present again: the scan
        // must truncate after 1, not collect index 3.
        let mut ctl = controller_with_vds(2);
        ctl.response_data.insert(
            "VD3 Properties".to_string(),
            json!({ "SCSI NAA Id": "naa3" }),
        );
        ctl.response_data
            .insert("PDs for VD 3".to_string(), json!([{ "Med": "HDD" }]));

        let drives = extract_virtual_drives(&ctl).unwrap();

        assert_eq!(drives.len(), 2);
        assert_eq!(drives[0].identifier, "wwn-0xnaa0");
        assert_eq!(drives[1].identifier, "wwn-0xnaa1");
    }

    #[test]
    fn test_scan_stops_when_pd_key_missing() {
        // Both keys must be present for an index to count
        let mut ctl = controller_with_vds(1);
        ctl.response_data.insert(
            "VD1 Properties".to_string(),
            json!({ "SCSI NAA Id": "naa1" }),
        );
        // no "PDs for VD 1"

        let drives = extract_virtual_drives(&ctl).unwrap();
        assert_eq!(drives.len(), 1);
    }

    #[test]
    fn test_scan_stops_when_vd_key_missing() {
        let mut ctl = controller_with_vds(1);
        ctl.response_data
            .insert("PDs for VD 1".to_string(), json!([{ "Med": "HDD" }]));
        // no "VD1 Properties"

        let drives = extract_virtual_drives(&ctl).unwrap();
        assert_eq!(drives.len(), 1);
    }

    #[test]
    fn test_first_pd_determines_media_type() {
        // Accepted simplification: heterogeneous members are not merged
        let ctl = controller_from(json!({
            "VD0 Properties": { "SCSI NAA Id": "naa0" },
            "PDs for VD 0": [
                { "Med": "HDD", "State": "Onln" },
                { "Med": "SSD", "State": "Onln" }
            ]
        }));

        let drives = extract_virtual_drives(&ctl).unwrap();
        assert_eq!(drives.len(), 1);
        assert_eq!(drives[0].media_type, "HDD");
    }

    #[test]
    fn test_empty_pd_list_is_decode_error() {
        let ctl = controller_from(json!({
            "VD0 Properties": { "SCSI NAA Id": "naa0" },
            "PDs for VD 0": []
        }));

        let err = extract_virtual_drives(&ctl).unwrap_err();
        assert!(matches!(err, ProbeError::Decode(_)));
    }

    #[test]
    fn test_pd_wrong_shape_is_decode_error() {
        let ctl = controller_from(json!({
            "VD0 Properties": { "SCSI NAA Id": "naa0" },
            "PDs for VD 0": { "Med": "HDD" }
        }));

        let err = extract_virtual_drives(&ctl).unwrap_err();
        assert!(matches!(err, ProbeError::Decode(_)));
    }

    #[test]
    fn test_vd_properties_wrong_shape_is_decode_error() {
        let ctl = controller_from(json!({
            "VD0 Properties": { "Strip Size": "64 KB" },
            "PDs for VD 0": [{ "Med": "HDD" }]
        }));

        let err = extract_virtual_drives(&ctl).unwrap_err();
        assert!(matches!(err, ProbeError::Decode(_)));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let ctl = controller_from(json!({
            "Product Name": "PERC H730P Mini",
            "Drive Groups": 1,
            "VD0 Properties": {
                "SCSI NAA Id": "naa0",
                "Creation Date": "05-01-2024",
                "Ongoing Progresses": "None"
            },
            "PDs for VD 0": [
                { "EID:Slt": "32:0", "Intf": "SAS", "Med": "HDD", "Model": "ST2000NM0135" }
            ]
        }));

        let drives = extract_virtual_drives(&ctl).unwrap();
        assert_eq!(drives.len(), 1);
        assert_eq!(drives[0].identifier, "wwn-0xnaa0");
        assert_eq!(drives[0].media_type, "HDD");
    }

    #[test]
    fn test_extraction_is_pure_function_of_input() {
        let raw = serde_json::to_vec(&json!({
            "Controllers": [{
                "Command Status": {
                    "Controller": 0,
                    "Status": "Success",
                    "Description": "None"
                },
                "Response Data": {
                    "VD0 Properties": { "SCSI NAA Id": "6a416e7a06f96000" },
                    "PDs for VD 0": [{ "Med": "SSD" }]
                }
            }]
        }))
        .unwrap();

        let first = extract_virtual_drives(&decode_report(&raw).unwrap().controllers[0]).unwrap();
        let second = extract_virtual_drives(&decode_report(&raw).unwrap().controllers[0]).unwrap();

        assert_eq!(first, second);
    }
}
