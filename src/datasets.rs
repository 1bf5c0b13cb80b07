//! The dataset catalog: wiring each export file to its mapper.
//!
//! Dataset groups are the operator-facing units (one CLI subcommand each);
//! a group expands to one or more concrete datasets, each with its own
//! export file and its own baseline.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::SyncConfig;
use crate::date::month_number;
use crate::entity::{
    Appointment, AppointmentKind, Award, Course, DegreeEducation, Document, DocumentKind, Grant,
    GraphEmittable, Membership, NonDegreeEducation, OrgKind, Organization, Patent, Person,
    Presentation, Reviewership,
};
use crate::entity::person::{format_phone, person_uri};
use crate::error::{ConfigError, VitaResult};
use crate::ident::IdResolver;
use crate::mapper::{DatasetMapper, EntityBuilder, FieldTransform};
use crate::source::{DelimitedSource, ExportXmlSource, Record, RecordSource};

/// Roles in the faculty export that count as faculty.
pub const FACULTY_ROLES: &[&str] =
    &["Dean", "Dep Head", "Provost", "Faculty", "Faculty-COI", "CLAD"];

/// Placeholder names the department feed uses for "no real department".
fn valid_department_name(name: Option<&str>) -> bool {
    matches!(name, Some(n) if n != "No Department" && n != "University-level Dept")
}

fn valid_college_name(name: Option<&str>) -> bool {
    matches!(name, Some(n) if n != "University" && n != "No College Designated")
}

fn year(record: &Record, field: &str) -> Option<i32> {
    record.get(field).and_then(|v| v.parse().ok())
}

fn month(record: &Record, field: &str) -> Option<u32> {
    record.get(field).and_then(month_number)
}

fn day(record: &Record, field: &str) -> Option<u32> {
    record.get(field).and_then(|v| v.parse().ok())
}

/// One subcommand's worth of datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetGroup {
    Faculty,
    Departments,
    AcademicAppointments,
    AdminAppointments,
    Research,
    Education,
    Courses,
    Service,
    Grants,
}

impl DatasetGroup {
    pub const ALL: [DatasetGroup; 9] = [
        DatasetGroup::Faculty,
        DatasetGroup::Departments,
        DatasetGroup::AcademicAppointments,
        DatasetGroup::AdminAppointments,
        DatasetGroup::Research,
        DatasetGroup::Education,
        DatasetGroup::Courses,
        DatasetGroup::Service,
        DatasetGroup::Grants,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DatasetGroup::Faculty => "faculty",
            DatasetGroup::Departments => "departments",
            DatasetGroup::AcademicAppointments => "academic-appointments",
            DatasetGroup::AdminAppointments => "admin-appointments",
            DatasetGroup::Research => "research",
            DatasetGroup::Education => "education",
            DatasetGroup::Courses => "courses",
            DatasetGroup::Service => "service",
            DatasetGroup::Grants => "grants",
        }
    }
}

/// The document datasets: (dataset name, export file, asserted kind).
const DOCUMENT_DATASETS: &[(&str, &str, DocumentKind)] = &[
    ("books", "fis_books.xml", DocumentKind::Book),
    ("reports", "fis_reports.xml", DocumentKind::Report),
    ("articles", "fis_articles.xml", DocumentKind::Article),
    ("academic-articles", "fis_acad_articles.xml", DocumentKind::AcademicArticle),
    ("article-abstracts", "fis_article_abstracts.xml", DocumentKind::ArticleAbstract),
    ("reviews", "fis_reviews.xml", DocumentKind::Review),
    ("reference-articles", "fis_ref_articles.xml", DocumentKind::ReferenceEntry),
    ("letters", "fis_letters.xml", DocumentKind::Letter),
    ("chapters", "fis_chapters.xml", DocumentKind::Chapter),
    ("conference-abstracts", "fis_conf_abstracts.xml", DocumentKind::ConferenceAbstract),
    ("testimony", "fis_testimony.xml", DocumentKind::Testimony),
];

pub struct DatasetCatalog {
    resolver: IdResolver,
    data_dir: PathBuf,
    institution: String,
    limit: Option<usize>,
    fac_limit: Option<usize>,
}

impl DatasetCatalog {
    pub fn new(
        config: &SyncConfig,
        limit: Option<usize>,
        fac_limit: Option<usize>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            resolver: IdResolver::new(&config.base_namespace)?,
            data_dir: config.data_dir.clone(),
            institution: config.institution.clone(),
            limit,
            fac_limit,
        })
    }

    pub fn resolver(&self) -> &IdResolver {
        &self.resolver
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    fn xml(&self, file: &str) -> ExportXmlSource {
        ExportXmlSource::new(self.path(file))
    }

    /// The person ids that count as faculty: allow-listed roles in the
    /// faculty export, intersected with the demographic feed.
    pub fn faculty_ids(&self) -> VitaResult<Arc<BTreeSet<String>>> {
        let mut roster = BTreeSet::new();
        for record in self.xml("fis_faculty.xml").records()? {
            let record = record?;
            if record.get("role").is_some_and(|r| FACULTY_ROLES.contains(&r)) {
                if let Some(id) = record.get("person_id") {
                    roster.insert(id.to_string());
                }
            }
        }
        let mut demographic = BTreeSet::new();
        for record in DelimitedSource::pipe(self.path("vivo_demographic.txt")).records()? {
            let record = record?;
            if let Some(id) = record.get("EMPLOYEEID") {
                demographic.insert(id.to_string());
            }
        }
        let mut ids: BTreeSet<String> = roster.intersection(&demographic).cloned().collect();
        if let Some(limit) = self.fac_limit {
            ids = ids.into_iter().take(limit).collect();
        }
        Ok(Arc::new(ids))
    }

    /// Every mapper for one group. Each mapper is a separate sync run with
    /// its own baseline.
    pub fn mappers(&self, group: DatasetGroup) -> VitaResult<Vec<DatasetMapper>> {
        Ok(match group {
            DatasetGroup::Faculty => vec![self.faculty()?, self.demographic()?],
            DatasetGroup::Departments => vec![self.departments()],
            DatasetGroup::AcademicAppointments => vec![self.academic_appointments()?],
            DatasetGroup::AdminAppointments => vec![self.admin_appointments()?],
            DatasetGroup::Research => {
                let mut mappers = Vec::with_capacity(DOCUMENT_DATASETS.len() + 1);
                for (name, file, kind) in DOCUMENT_DATASETS {
                    mappers.push(self.documents(name, file, *kind)?);
                }
                mappers.push(self.patents()?);
                mappers
            }
            DatasetGroup::Education => {
                vec![self.degree_education()?, self.non_degree_education()?]
            }
            DatasetGroup::Courses => vec![self.courses()?],
            DatasetGroup::Service => vec![
                self.awards()?,
                self.memberships()?,
                self.reviewerships()?,
                self.presentations()?,
            ],
            DatasetGroup::Grants => vec![self.grants()?],
        })
    }

    fn with_faculty_filter(&self, mapper: DatasetMapper) -> VitaResult<DatasetMapper> {
        let faculty = self.faculty_ids()?;
        Ok(mapper.filter(move |record| {
            record
                .get("person_id")
                .is_some_and(|id| faculty.contains(id))
        }))
    }

    fn university(&self) -> Organization {
        Organization::new(&self.resolver, &self.institution, OrgKind::University, true)
    }

    fn faculty(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let id = record.require("person_id")?;
            let mut person = Person::new(&resolver, id);
            person.overview = record.get("personal_statement").map(str::to_string);
            person.research_statement = record.get("scholarly_interest").map(str::to_string);
            person.languages_known = record.get("languages_known").map(str::to_string);
            person.languages_other = record.get("languages_other").map(str::to_string);
            // Home department only when both names are real, not placeholders.
            if valid_department_name(record.get("home_department"))
                && valid_college_name(record.get("home_college"))
            {
                let department = Organization::new(
                    &resolver,
                    record.require("home_department")?,
                    OrgKind::AcademicDepartment,
                    true,
                );
                person.home_department = Some(department.uri().clone());
            }
            Ok(vec![Box::new(person) as Box<dyn GraphEmittable>])
        });
        let mapper = DatasetMapper::new("faculty", self.xml("fis_faculty.xml"), builder)
            .limit(self.limit);
        self.with_faculty_filter(mapper)
    }

    /// Names and vcard contact blocks from the demographic feed.
    fn demographic(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let mut person = Person::new(&resolver, record.require("person_id")?);
            person.emit_contact = true;
            person.given_name = record.get("FIRST_NAME").map(str::to_string);
            person.middle_name = record.get("MIDDLE_NAME").map(str::to_string);
            person.family_name = record.get("LAST_NAME").map(str::to_string);
            person.email = record.get("EMAIL").map(str::to_string);
            person.phone = record.get("PHONE").and_then(format_phone);
            let street: Vec<&str> = ["ADDRESS_LINE1", "ADDRESS_LINE2", "ADDRESS_LINE3"]
                .into_iter()
                .filter_map(|field| record.get(field))
                .collect();
            if !street.is_empty() {
                person.street_address = Some(street.join("; "));
            }
            person.city = record.get("CITY").map(str::to_string);
            person.state = record.get("STATE").map(str::to_string);
            person.postal_code = record.get("ZIP").map(str::to_string);
            Ok(vec![Box::new(person) as Box<dyn GraphEmittable>])
        });
        let mapper = DatasetMapper::new(
            "demographic",
            DelimitedSource::pipe(self.path("vivo_demographic.txt")),
            builder,
        )
        .transform(FieldTransform::rename("EMPLOYEEID", "person_id"))
        .limit(self.limit);
        self.with_faculty_filter(mapper)
    }

    fn departments(&self) -> DatasetMapper {
        let resolver = self.resolver.clone();
        let university = self.university();
        let university_uri = university.uri().clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let mut college = Organization::new(
                &resolver,
                record.require("college")?,
                OrgKind::College,
                true,
            );
            college.part_of = Some(university_uri.clone());
            let mut department = Organization::new(
                &resolver,
                record.require("department")?,
                OrgKind::AcademicDepartment,
                true,
            );
            department.part_of = Some(college.uri().clone());
            Ok(vec![
                Box::new(college) as Box<dyn GraphEmittable>,
                Box::new(department),
            ])
        });
        DatasetMapper::new("departments", self.xml("fis_department.xml"), builder)
            .filter(|record| {
                valid_department_name(record.get("department"))
                    && valid_college_name(record.get("college"))
            })
            .limit(self.limit)
            .seed(university.to_graph())
    }

    fn academic_appointments(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            // Department when real, college otherwise; the filter guarantees
            // at least one of them is.
            let unit = if valid_department_name(record.get("department")) {
                record.require("department")?
            } else {
                record.require("college")?
            };
            let organization = Organization::external(&resolver, unit);
            let appointment = Appointment::new(
                &resolver,
                AppointmentKind::Academic,
                &person,
                organization.uri(),
                record.require("rank")?,
                None,
                record.get("start_term"),
                record.get("end_term"),
            );
            Ok(vec![Box::new(appointment) as Box<dyn GraphEmittable>])
        });
        let faculty = self.faculty_ids()?;
        Ok(DatasetMapper::new(
            "academic-appointments",
            self.xml("fis_academic_appointment.xml"),
            builder,
        )
        .filter(move |record| {
            record
                .get("person_id")
                .is_some_and(|id| faculty.contains(id))
                && (valid_department_name(record.get("department"))
                    || valid_college_name(record.get("college")))
        })
        .limit(self.limit))
    }

    fn admin_appointments(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let institution = self.institution.clone();
        let university = self.university();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            // Department, else college, else the institution itself.
            let unit = if valid_department_name(record.get("department")) {
                record.require("department")?
            } else if valid_college_name(record.get("college")) {
                record.require("college")?
            } else {
                institution.as_str()
            };
            let organization = Organization::external(&resolver, unit);
            let appointment = Appointment::new(
                &resolver,
                AppointmentKind::Admin,
                &person,
                organization.uri(),
                record.require("rank")?,
                record.get("title"),
                record.get("start_term"),
                record.get("end_term"),
            );
            Ok(vec![Box::new(appointment) as Box<dyn GraphEmittable>])
        });
        let mapper = DatasetMapper::new(
            "admin-appointments",
            self.xml("fis_admin_appointment.xml"),
            builder,
        )
        .limit(self.limit)
        .seed(university.to_graph());
        self.with_faculty_filter(mapper)
    }

    fn documents(&self, name: &str, file: &str, kind: DocumentKind) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            let mut document = Document::new(&resolver, kind, &person, record.require("title")?);
            document.start_year = year(record, "contribution_start_year");
            document.start_month = month(record, "contribution_start_month");
            document.venue = record.get("publication_venue_name").map(str::to_string);
            document.event = record
                .get("conference")
                .or_else(|| record.get("name"))
                .map(str::to_string);

            let mut entities: Vec<Box<dyn GraphEmittable>> = Vec::new();
            if let Some(publisher) = record.get("publisher") {
                let organization = Organization::external(&resolver, publisher);
                document.publisher = Some(organization.uri().clone());
                entities.push(Box::new(organization));
            }
            if let Some(distributor) = record.get("distributor") {
                let organization = Organization::external(&resolver, distributor);
                document.distributor = Some(organization.uri().clone());
                entities.push(Box::new(organization));
            }
            entities.push(Box::new(document));
            Ok(entities)
        });
        let mapper = DatasetMapper::new(name, self.xml(file), builder).limit(self.limit);
        self.with_faculty_filter(mapper)
    }

    fn patents(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            let mut patent = Patent::new(&resolver, &person, record.require("title")?);
            patent.patent_number = record.get("patent").map(str::to_string);
            patent.start_year = year(record, "contribution_start_year");
            patent.start_month = month(record, "contribution_start_month");
            Ok(vec![Box::new(patent) as Box<dyn GraphEmittable>])
        });
        let mapper =
            DatasetMapper::new("patents", self.xml("fis_patents.xml"), builder).limit(self.limit);
        self.with_faculty_filter(mapper)
    }

    fn degree_education(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            let organization = Organization::external(&resolver, record.require("institution")?);
            let mut education = DegreeEducation::new(
                &resolver,
                &person,
                organization.uri(),
                record.require("degree_name")?,
            );
            education.program = record.get("program").map(str::to_string);
            education.major = record.get("major").map(str::to_string);
            education.start_term = record.get("start_term").map(str::to_string);
            education.end_term = record.get("end_term").map(str::to_string);
            Ok(vec![
                Box::new(organization) as Box<dyn GraphEmittable>,
                Box::new(education),
            ])
        });
        let mapper = DatasetMapper::new(
            "degree-education",
            self.xml("fis_degree_education.xml"),
            builder,
        )
        .limit(self.limit);
        self.with_faculty_filter(mapper)
    }

    fn non_degree_education(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            let organization = Organization::external(&resolver, record.require("institution")?);
            let mut education = NonDegreeEducation::new(
                &resolver,
                &person,
                organization.uri(),
                record.get("degree"),
                record.get("program"),
            );
            education.start_term = record.get("start_term").map(str::to_string);
            education.end_term = record.get("end_term").map(str::to_string);
            Ok(vec![
                Box::new(organization) as Box<dyn GraphEmittable>,
                Box::new(education),
            ])
        });
        let mapper = DatasetMapper::new(
            "non-degree-education",
            self.xml("fis_non_degree_education.xml"),
            builder,
        )
        .limit(self.limit);
        self.with_faculty_filter(mapper)
    }

    fn courses(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            let mut course = Course::new(
                &resolver,
                &person,
                record.require("course_id")?,
                record.require("subject_id")?,
                record.get("start_term"),
            );
            course.end_term = record.get("end_term").map(str::to_string);
            Ok(vec![Box::new(course) as Box<dyn GraphEmittable>])
        });
        let mapper =
            DatasetMapper::new("courses", self.xml("fis_courses.xml"), builder).limit(self.limit);
        self.with_faculty_filter(mapper)
    }

    fn awards(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            let mut award = Award::new(&resolver, &person, record.require("title")?);
            award.year = year(record, "contribution_start_year");
            award.month = month(record, "contribution_start_month");
            let mut entities: Vec<Box<dyn GraphEmittable>> = Vec::new();
            if let Some(name) = record.get("organization") {
                let organization = Organization::external(&resolver, name);
                award.assigned_by = Some(organization.uri().clone());
                entities.push(Box::new(organization));
            }
            entities.push(Box::new(award));
            Ok(entities)
        });
        let mapper =
            DatasetMapper::new("awards", self.xml("fis_awards.xml"), builder).limit(self.limit);
        self.with_faculty_filter(mapper)
    }

    fn memberships(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            let organization = Organization::external(&resolver, record.require("organization")?);
            let membership = Membership::new(
                &resolver,
                &person,
                organization.uri(),
                record.require("position")?,
                year(record, "contribution_start_year"),
                month(record, "contribution_start_month"),
                year(record, "contribution_end_year"),
                month(record, "contribution_end_month"),
            );
            Ok(vec![
                Box::new(organization) as Box<dyn GraphEmittable>,
                Box::new(membership),
            ])
        });
        let mapper = DatasetMapper::new(
            "memberships",
            self.xml("fis_prof_memberships.xml"),
            builder,
        )
        .limit(self.limit);
        self.with_faculty_filter(mapper)
    }

    fn reviewerships(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            let reviewership = Reviewership::new(
                &resolver,
                &person,
                record.require("service_name")?,
                record.require("position")?,
                year(record, "contribution_start_year"),
                month(record, "contribution_start_month"),
                year(record, "contribution_end_year"),
                month(record, "contribution_end_month"),
            );
            Ok(vec![Box::new(reviewership) as Box<dyn GraphEmittable>])
        });
        let mapper = DatasetMapper::new("reviewerships", self.xml("fis_reviewer.xml"), builder)
            .limit(self.limit);
        self.with_faculty_filter(mapper)
    }

    fn presentations(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            let presentation = Presentation::new(
                &resolver,
                &person,
                record.require("title")?,
                record.require("service_name")?,
                year(record, "contribution_start_year"),
                month(record, "contribution_start_month"),
            );
            Ok(vec![Box::new(presentation) as Box<dyn GraphEmittable>])
        });
        let mapper =
            DatasetMapper::new("presentations", self.xml("fis_presentations.xml"), builder)
                .limit(self.limit);
        self.with_faculty_filter(mapper)
    }

    fn grants(&self) -> VitaResult<DatasetMapper> {
        let resolver = self.resolver.clone();
        let builder: EntityBuilder = Box::new(move |record| {
            let person = person_uri(&resolver, record.require("person_id")?);
            let mut grant = Grant::new(
                &resolver,
                &person,
                record.require("title")?,
                record.require("grant_role_code")?,
                year(record, "contribution_start_year"),
                month(record, "contribution_start_month"),
            )?;
            grant.award_amount = record.get("award_amount").map(str::to_string);
            grant.award_start_year = year(record, "award_begin_year");
            grant.award_start_month = month(record, "award_begin_month");
            grant.award_start_day = day(record, "award_begin_day");
            grant.award_end_year = year(record, "award_end_year");
            grant.award_end_month = month(record, "award_end_month");
            grant.award_end_day = day(record, "award_end_day");
            let mut entities: Vec<Box<dyn GraphEmittable>> = Vec::new();
            if let Some(funder) = record.get("awarded_by") {
                let organization = Organization::external(&resolver, funder);
                grant.awarded_by = Some(organization.uri().clone());
                entities.push(Box::new(organization));
            }
            entities.push(Box::new(grant));
            Ok(entities)
        });
        let mapper =
            DatasetMapper::new("grants", self.xml("fis_grants.xml"), builder).limit(self.limit);
        self.with_faculty_filter(mapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn xml_rows(rows: &[&[(&str, &str)]]) -> String {
        let mut out = String::from(
            "<?xml version=\"1.0\"?>\n<resultset xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\n",
        );
        for row in rows {
            out.push_str("<row>");
            for (name, value) in *row {
                out.push_str(&format!("<field name=\"{name}\">{value}</field>"));
            }
            out.push_str("</row>\n");
        }
        out.push_str("</resultset>\n");
        out
    }

    fn catalog(data_dir: &std::path::Path) -> DatasetCatalog {
        let config = SyncConfig {
            data_dir: data_dir.to_path_buf(),
            ..SyncConfig::default()
        };
        DatasetCatalog::new(&config, None, None).unwrap()
    }

    fn seed_faculty(dir: &std::path::Path) {
        fs::write(
            dir.join("fis_faculty.xml"),
            xml_rows(&[
                &[("person_id", "1000123"), ("role", "Faculty")],
                &[("person_id", "1000456"), ("role", "Staff")],
                &[("person_id", "1000789"), ("role", "Dean")],
            ]),
        )
        .unwrap();
        fs::write(
            dir.join("vivo_demographic.txt"),
            "EMPLOYEEID|NETID\n1000123|jdoe\n1000456|asmith\n",
        )
        .unwrap();
    }

    #[test]
    fn faculty_ids_intersect_roles_and_demographics() {
        let dir = tempfile::tempdir().unwrap();
        seed_faculty(dir.path());
        let ids = catalog(dir.path()).faculty_ids().unwrap();
        // 1000456 has the wrong role; 1000789 is not in the demographic feed.
        assert_eq!(ids.iter().collect::<Vec<_>>(), vec!["1000123"]);
    }

    #[test]
    fn fac_limit_truncates_the_allow_list() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("fis_faculty.xml"),
            xml_rows(&[
                &[("person_id", "1000123"), ("role", "Faculty")],
                &[("person_id", "1000456"), ("role", "Faculty")],
            ]),
        )
        .unwrap();
        fs::write(
            dir.path().join("vivo_demographic.txt"),
            "EMPLOYEEID|NETID\n1000123|jdoe\n1000456|asmith\n",
        )
        .unwrap();
        let config = SyncConfig {
            data_dir: dir.path().to_path_buf(),
            ..SyncConfig::default()
        };
        let catalog = DatasetCatalog::new(&config, None, Some(1)).unwrap();
        assert_eq!(catalog.faculty_ids().unwrap().len(), 1);
    }

    #[test]
    fn demographic_fills_names_and_contact_for_the_roster_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("fis_faculty.xml"),
            xml_rows(&[
                &[("person_id", "1000123"), ("role", "Faculty")],
                &[("person_id", "1000456"), ("role", "Staff")],
            ]),
        )
        .unwrap();
        fs::write(
            dir.path().join("vivo_demographic.txt"),
            "EMPLOYEEID|FIRST_NAME|MIDDLE_NAME|LAST_NAME|ADDRESS_LINE1|ADDRESS_LINE2|ADDRESS_LINE3|CITY|STATE|ZIP|EMAIL|NETID|PHONE\n\
             1000123|Ada||Lovelace|2121 I St NW|||Washington|DC|20052|alovelace@example.edu|alovelace|202 994 1000\n\
             1000456|Bob||Staffer|||||||bstaffer@example.edu|bstaffer|\n",
        )
        .unwrap();
        let graph = catalog(dir.path())
            .demographic()
            .unwrap()
            .load()
            .unwrap()
            .unwrap();
        let objects: Vec<String> = graph.iter().map(|t| t.object.to_string()).collect();
        assert!(objects.contains(&"\"Ada Lovelace\"".to_string()));
        assert!(objects.contains(&"\"alovelace@example.edu\"".to_string()));
        assert!(objects.contains(&"\"202-994-1000\"".to_string()));
        assert!(objects.contains(&"\"2121 I St NW\"".to_string()));
        // Not on the faculty roster.
        assert!(!objects.contains(&"\"Bob Staffer\"".to_string()));
    }

    #[test]
    fn departments_skip_placeholders_and_seed_the_university() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("fis_department.xml"),
            xml_rows(&[
                &[("college", "Arts and Sciences"), ("department", "Chemistry")],
                &[("college", "University"), ("department", "Chemistry")],
                &[("college", "Arts and Sciences"), ("department", "No Department")],
            ]),
        )
        .unwrap();
        let catalog = catalog(dir.path());
        let graph = catalog.departments().load().unwrap().unwrap();
        let labels: Vec<String> = graph.iter().map(|t| t.object.to_string()).collect();
        assert!(labels.contains(&"\"Chemistry\"".to_string()));
        assert!(labels.contains(&"\"Example University\"".to_string()));
        assert!(!labels.contains(&"\"No Department\"".to_string()));
    }

    #[test]
    fn grants_reject_unmapped_role_codes_per_record() {
        let dir = tempfile::tempdir().unwrap();
        seed_faculty(dir.path());
        fs::write(
            dir.path().join("fis_grants.xml"),
            xml_rows(&[
                &[
                    ("person_id", "1000123"),
                    ("title", "A Study"),
                    ("grant_role_code", "PI"),
                    ("award_amount", "$10,000.00"),
                ],
                &[
                    ("person_id", "1000123"),
                    ("title", "Another Study"),
                    ("grant_role_code", "Advisor"),
                ],
            ]),
        )
        .unwrap();
        let graph = catalog(dir.path()).grants().unwrap().load().unwrap().unwrap();
        let labels: Vec<String> = graph.iter().map(|t| t.object.to_string()).collect();
        assert!(labels.contains(&"\"A Study\"".to_string()));
        assert!(!labels.contains(&"\"Another Study\"".to_string()));
        assert!(labels.contains(&"\"$10,000\"".to_string()));
    }

    #[test]
    fn research_group_expands_to_every_document_dataset() {
        let dir = tempfile::tempdir().unwrap();
        seed_faculty(dir.path());
        let mappers = catalog(dir.path()).mappers(DatasetGroup::Research).unwrap();
        let names: Vec<&str> = mappers.iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), DOCUMENT_DATASETS.len() + 1);
        assert!(names.contains(&"books"));
        assert!(names.contains(&"testimony"));
        assert!(names.contains(&"patents"));
    }
}
