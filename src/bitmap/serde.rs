use serde::de::SeqAccess;
use serde::de::Visitor;
use serde::ser::SerializeSeq;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::RleBitmap;

impl<'de> Deserialize<'de> for RleBitmap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RunsVisitor;

        impl<'de> Visitor<'de> for RunsVisitor {
            type Value = RleBitmap;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a sequence of run lengths")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<RleBitmap, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut runs: Vec<u64> = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(run) = seq.next_element()? {
                    runs.push(run);
                }
                RleBitmap::try_from_runs(runs).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_seq(RunsVisitor)
    }
}

impl Serialize for RleBitmap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.runs().len()))?;
        for run in self.runs() {
            seq.serialize_element(run)?;
        }
        seq.end()
    }
}
