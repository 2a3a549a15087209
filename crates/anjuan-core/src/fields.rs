//! Template field map construction.
//!
//! Every template placeholder is addressable by its Chinese key. Common
//! fields carry the case and session context; person-specific fields are
//! prefixed with the person-type label (本人姓名, 证人姓名, …) so one
//! template never picks up another role's values.

use std::collections::BTreeMap;

use crate::identity::IdProfile;
use crate::models::interview::InterviewForm;
use crate::models::regulation;

pub type FieldMap = BTreeMap<String, String>;

/// Assemble the full field map for one interview document.
///
/// `current_date`/`current_time` are the session's preformatted display
/// strings (%Y年%m月%d日 / %H时%M分). Empty inputs stay empty strings; the
/// operator falls back to 未填写 as the original form did.
pub fn build_field_map(
    form: &InterviewForm,
    case_number: &str,
    profile: &IdProfile,
    current_date: &str,
    current_time: &str,
) -> FieldMap {
    let mut fields = FieldMap::new();
    let operator = form.operator.trim();

    fields.insert("案号".into(), case_number.to_string());
    fields.insert("案件类型".into(), form.case_type().label().to_string());
    fields.insert("人员类型".into(), form.person_type.label().to_string());
    fields.insert(
        "条例".into(),
        regulation::clause_or_unknown(form.regulation_index).to_string(),
    );
    fields.insert("当前日期".into(), current_date.to_string());
    fields.insert("当前时间".into(), current_time.to_string());
    fields.insert("生成时间".into(), format!("{current_date} {current_time}"));
    fields.insert("受伤职工".into(), form.injured_name().to_string());
    fields.insert("用人单位".into(), form.employer.trim().to_string());
    fields.insert("用工单位".into(), form.work_unit.trim().to_string());
    fields.insert("工作场所".into(), form.workplace.trim().to_string());
    fields.insert(
        "操作员".into(),
        if operator.is_empty() {
            "未填写".to_string()
        } else {
            operator.to_string()
        },
    );

    let p = form.person_type.label();
    fields.insert(format!("{p}姓名"), form.name.trim().to_string());
    fields.insert(
        format!("{p}性别"),
        profile.gender.map(|g| g.label().to_string()).unwrap_or_default(),
    );
    fields.insert(
        format!("{p}年龄"),
        profile.age.map(|a| a.to_string()).unwrap_or_default(),
    );
    fields.insert(format!("{p}身份证号"), form.id_number.trim().to_string());
    fields.insert(format!("{p}身份证地址"), form.id_address.trim().to_string());
    fields.insert(format!("{p}现住址"), form.current_address.trim().to_string());
    fields.insert(format!("{p}电话"), form.phone.trim().to_string());
    fields.insert(format!("{p}岗位"), form.position.trim().to_string());

    fields
}
