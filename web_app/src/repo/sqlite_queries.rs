pub const QUERY_GET_PROFILES: &str = r#"
SELECT
    id,owner_id,name,birth_date,breed,color,microchip_id,
    breeder_name,notes,created_at,updated_at
FROM puppy_profile
WHERE owner_id=$1
ORDER BY created_at;
"#;

pub const QUERY_GET_PROFILE: &str = r#"
SELECT
    id,owner_id,name,birth_date,breed,color,microchip_id,
    breeder_name,notes,created_at,updated_at
FROM puppy_profile
WHERE id=$1 AND owner_id=$2;
"#;

pub const QUERY_INSERT_PROFILE: &str = r#"
INSERT INTO puppy_profile (
    owner_id,name,birth_date,breed,color,
    microchip_id,breeder_name,notes,
    created_at,updated_at
) VALUES(
    $1,$2,$3,$4,$5,
    $6,$7,$8,
    $9,$10
);
"#;

pub const QUERY_UPDATE_PROFILE: &str = r#"
UPDATE puppy_profile SET
    name=$3,birth_date=$4,breed=$5,color=$6,
    microchip_id=$7,breeder_name=$8,notes=$9,updated_at=$10
WHERE id=$1 AND owner_id=$2;
"#;

pub const QUERY_DELETE_PROFILE: &str =
    r#"DELETE FROM puppy_profile WHERE id=$1 AND owner_id=$2;"#;

pub const QUERY_PROFILE_BELONGS_TO_OWNER: &str =
    r#"SELECT 1 FROM puppy_profile WHERE id=$1 AND owner_id=$2;"#;

pub const QUERY_GET_FOODS: &str = r#"
SELECT
    f.id,f.profile_id,f.brand_name,f.protein,f.fat,f.fiber,
    f.moisture,f.ash,f.food_type,f.is_default,f.created_at
FROM food_setting AS f
JOIN puppy_profile AS p ON (p.id=f.profile_id)
WHERE f.profile_id=$1 AND p.owner_id=$2
ORDER BY f.food_type,f.created_at;
"#;

pub const QUERY_INSERT_FOOD: &str = r#"
INSERT INTO food_setting (
    profile_id,brand_name,protein,fat,fiber,moisture,ash,
    food_type,is_default,created_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8,$9,$10)
RETURNING id;
"#;

pub const QUERY_GET_OWNED_FOOD_TYPE: &str = r#"
SELECT f.food_type
FROM food_setting AS f
JOIN puppy_profile AS p ON (p.id=f.profile_id)
WHERE f.id=$1 AND f.profile_id=$2 AND p.owner_id=$3;
"#;

pub const QUERY_CLEAR_DEFAULT_FOOD: &str = r#"
UPDATE food_setting SET is_default=0
WHERE profile_id=$1 AND food_type=$2 AND is_default=1;
"#;

pub const QUERY_SET_DEFAULT_FOOD: &str = r#"UPDATE food_setting SET is_default=1 WHERE id=$1;"#;

pub const QUERY_DELETE_FOOD: &str = r#"
DELETE FROM food_setting
WHERE id=$3 AND profile_id IN (
    SELECT id FROM puppy_profile WHERE id=$1 AND owner_id=$2
);
"#;

pub const QUERY_GET_SCHEDULE: &str = r#"
SELECT
    hs.id,hs.profile_id,hs.vaccine_type,hs.week_number,hs.due_date,
    hs.description,hs.administered,hs.administered_date,
    hs.administrator,hs.lot_number,hs.notes
FROM health_schedule AS hs
JOIN puppy_profile AS p ON (p.id=hs.profile_id)
WHERE hs.profile_id=$1 AND p.owner_id=$2
ORDER BY hs.due_date,hs.week_number,hs.id;
"#;

pub const QUERY_DELETE_SCHEDULE: &str = r#"DELETE FROM health_schedule WHERE profile_id=$1;"#;

pub const QUERY_INSERT_SCHEDULE_ENTRY: &str = r#"
INSERT INTO health_schedule (
    id,profile_id,vaccine_type,week_number,due_date,description,
    administered,administered_date,administrator,lot_number,notes
) VALUES($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11);
"#;

pub const QUERY_ADMINISTER_ENTRY: &str = r#"
UPDATE health_schedule SET
    administered=1,administered_date=$4,administrator=$5,lot_number=$6,notes=$7
WHERE id=$3 AND profile_id IN (
    SELECT id FROM puppy_profile WHERE id=$1 AND owner_id=$2
);
"#;

pub const QUERY_GET_WEIGHTS: &str = r#"
SELECT w.id,w.profile_id,w.date,w.weight_grams
FROM weight_log AS w
JOIN puppy_profile AS p ON (p.id=w.profile_id)
WHERE w.profile_id=$1 AND p.owner_id=$2
ORDER BY w.date,w.id;
"#;

pub const QUERY_INSERT_WEIGHT: &str = r#"
INSERT INTO weight_log (
    profile_id,date,weight_grams
) SELECT p.id,$3,$4
FROM puppy_profile AS p
WHERE p.id=$1 AND p.owner_id=$2
RETURNING id;
"#;

pub const QUERY_DELETE_WEIGHT: &str = r#"
DELETE FROM weight_log
WHERE id=$3 AND profile_id IN (
    SELECT id FROM puppy_profile WHERE id=$1 AND owner_id=$2
);
"#;

pub const QUERY_GET_VITALS: &str = r#"
SELECT v.id,v.profile_id,v.date,v.fecal_score,v.gum_color,v.crt_seconds
FROM vitals_log AS v
JOIN puppy_profile AS p ON (p.id=v.profile_id)
WHERE v.profile_id=$1 AND p.owner_id=$2
ORDER BY v.date,v.id;
"#;

pub const QUERY_INSERT_VITALS: &str = r#"
INSERT INTO vitals_log (
    profile_id,date,fecal_score,gum_color,crt_seconds
) SELECT p.id,$3,$4,$5,$6
FROM puppy_profile AS p
WHERE p.id=$1 AND p.owner_id=$2
RETURNING id;
"#;

pub const QUERY_GET_FEEDINGS: &str = r#"
SELECT fl.id,fl.profile_id,fl.fed_at,fl.meal_type,fl.amount_grams,fl.food_brand_id
FROM feeding_log AS fl
JOIN puppy_profile AS p ON (p.id=fl.profile_id)
WHERE fl.profile_id=$1 AND p.owner_id=$2
ORDER BY fl.fed_at,fl.id;
"#;

pub const QUERY_GET_FEEDINGS_BETWEEN: &str = r#"
SELECT fl.id,fl.profile_id,fl.fed_at,fl.meal_type,fl.amount_grams,fl.food_brand_id
FROM feeding_log AS fl
JOIN puppy_profile AS p ON (p.id=fl.profile_id)
WHERE fl.profile_id=$1 AND p.owner_id=$2 AND fl.fed_at>=$3 AND fl.fed_at<$4
ORDER BY fl.fed_at,fl.id;
"#;

pub const QUERY_INSERT_FEEDING: &str = r#"
INSERT INTO feeding_log (
    profile_id,fed_at,meal_type,amount_grams,food_brand_id
) SELECT p.id,$3,$4,$5,$6
FROM puppy_profile AS p
WHERE p.id=$1 AND p.owner_id=$2
RETURNING id;
"#;
