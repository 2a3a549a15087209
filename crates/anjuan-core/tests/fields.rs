use jiff::civil::date;

use anjuan_core::fields::build_field_map;
use anjuan_core::identity;
use anjuan_core::models::interview::InterviewForm;
use anjuan_core::models::person::PersonType;

fn sample_form() -> InterviewForm {
    InterviewForm {
        person_type: PersonType::SelfParty,
        regulation_index: Some(0),
        name: " 张三 ".to_string(),
        id_number: "410101199001011234".to_string(),
        id_address: "河南省郑州市中原区某街1号".to_string(),
        current_address: "郑州市金水区某路2号".to_string(),
        phone: "13800000000".to_string(),
        position: "装配工".to_string(),
        employer: "某某机械有限公司".to_string(),
        work_unit: "第二车间".to_string(),
        workplace: "装配车间".to_string(),
        operator: "王调查".to_string(),
        ..InterviewForm::default()
    }
}

fn fields_for(form: &InterviewForm, case_number: &str) -> anjuan_core::fields::FieldMap {
    let profile = identity::parse(form.id_number.trim(), date(2024, 6, 15));
    build_field_map(form, case_number, &profile, "2024年06月15日", "10时30分")
}

#[test]
fn common_fields_are_populated() {
    let fields = fields_for(&sample_form(), "GS-张三-001");

    assert_eq!(fields["案号"], "GS-张三-001");
    assert_eq!(fields["案件类型"], "普通案件");
    assert_eq!(fields["人员类型"], "本人");
    assert_eq!(fields["条例"], "第十四条第一款第一项");
    assert_eq!(fields["当前日期"], "2024年06月15日");
    assert_eq!(fields["当前时间"], "10时30分");
    assert_eq!(fields["生成时间"], "2024年06月15日 10时30分");
    assert_eq!(fields["受伤职工"], "张三");
    assert_eq!(fields["用人单位"], "某某机械有限公司");
    assert_eq!(fields["操作员"], "王调查");
}

#[test]
fn person_fields_take_the_role_prefix() {
    let mut form = sample_form();
    form.person_type = PersonType::Witness;
    form.injured_worker = "赵六".to_string();
    let fields = fields_for(&form, "GS-赵六-001");

    assert_eq!(fields["证人姓名"], "张三");
    assert_eq!(fields["证人性别"], "男");
    assert_eq!(fields["证人年龄"], "34");
    assert_eq!(fields["证人身份证号"], "410101199001011234");
    assert_eq!(fields["受伤职工"], "赵六");
    assert!(!fields.contains_key("本人姓名"));
}

#[test]
fn legal_entity_fields_take_their_prefix() {
    let mut form = sample_form();
    form.person_type = PersonType::LegalEntity;
    form.injured_worker = "赵六".to_string();
    let fields = fields_for(&form, "GS-赵六-001");

    assert_eq!(fields["人员类型"], "法人");
    assert_eq!(fields["法人姓名"], "张三");
}

#[test]
fn blank_operator_renders_as_unfilled() {
    let mut form = sample_form();
    form.operator = "  ".to_string();
    let fields = fields_for(&form, "GS-张三-001");
    assert_eq!(fields["操作员"], "未填写");
}

#[test]
fn out_of_range_regulation_is_unknown() {
    let mut form = sample_form();
    form.regulation_index = Some(9);
    assert_eq!(fields_for(&form, "GS-张三-001")["条例"], "未知条例");

    form.regulation_index = None;
    assert_eq!(fields_for(&form, "GS-张三-001")["条例"], "未知条例");
}

#[test]
fn unparsed_identity_leaves_age_and_gender_empty() {
    let mut form = sample_form();
    form.id_number = "123".to_string();
    let fields = fields_for(&form, "GS-张三-001");
    assert_eq!(fields["本人年龄"], "");
    assert_eq!(fields["本人性别"], "");
    assert_eq!(fields["本人身份证号"], "123");
}

#[test]
fn marking_both_flags_makes_an_individual_death_case() {
    let mut form = sample_form();
    form.individual_application = true;
    form.death_case = true;
    assert_eq!(fields_for(&form, "GRW-张三-001")["案件类型"], "个人申请死亡案件");
}
